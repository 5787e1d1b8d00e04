//! External service provider ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`TokenCodec`] | Signs and verifies session and reset tokens |
//! | [`PasswordHasher`] | One-way password hashing |
//! | [`EmailSender`] | Outbound email delivery |

/// Email delivery port
pub mod email;
/// Password hashing port
pub mod password;
/// Token codec port
pub mod token;

pub use email::EmailSender;
pub use password::PasswordHasher;
pub use token::TokenCodec;
