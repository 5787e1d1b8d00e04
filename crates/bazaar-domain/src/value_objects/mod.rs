//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Role`] | Closed set of authorization tags |
//! | [`SessionClaims`] | Payload of a verified session token |
//! | [`ResetClaims`] | Payload of a verified password reset token |
//! | [`CachedSession`] | Session cache entry with its fetch timestamp |
//! | [`EmailMessage`] | Outbound email |
//! | [`NotificationKind`] | Category of a user notification |

/// Outbound email value objects
pub mod email;
/// Authorization roles
pub mod role;
/// Session and token value objects
pub mod session;

pub use email::{EmailMessage, NotificationKind};
pub use role::Role;
pub use session::{CachedSession, ResetClaims, SessionClaims};
