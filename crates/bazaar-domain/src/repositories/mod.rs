//! Repository Interfaces
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`UserRepository`] | Credential store: lookup, creation and updates of user records |

/// User repository interface
pub mod user_repository;

pub use user_repository::UserRepository;
