//! # Bazaar Domain
//!
//! Core types and contracts for the Bazaar authentication and authorization core.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | User records and the session profile projection |
//! | [`value_objects`] | Roles, session claims, outbound email messages |
//! | [`repositories`] | Credential store interface |
//! | [`ports`] | Token, hashing, cache and email contracts |
//! | [`error`] | Domain error types and user-facing auth failures |
//! | [`constants`] | Lifetimes, cookie name, route and message literals |
//!
//! The domain crate has no knowledge of HTTP, JWT libraries or storage
//! engines; those live behind the traits in [`ports`] and [`repositories`].

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{NewUser, User, UserId, UserProfile, UserUpdate};
pub use error::{AuthError, Error, Result};
pub use ports::{EmailSender, PasswordHasher, SessionCache, TokenCodec};
pub use repositories::UserRepository;
pub use value_objects::{
    CachedSession, EmailMessage, NotificationKind, ResetClaims, Role, SessionClaims,
};
