//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`User`] | Full credential store record, including the password hash |
//! | [`UserProfile`] | Hash-free projection used for sessions and API responses |

/// User records and projections
pub mod user;

pub use user::{NewUser, User, UserId, UserProfile, UserUpdate};
