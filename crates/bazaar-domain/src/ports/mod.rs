//! Domain Port Interfaces
//!
//! Contracts implemented by the infrastructure layer and consumed by the
//! application layer.
//!
//! ## Organization
//!
//! - **providers/** - token signing, password hashing and email delivery
//! - **infrastructure/** - process-local services (session cache)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::SessionCache;
pub use providers::{EmailSender, PasswordHasher, TokenCodec};
