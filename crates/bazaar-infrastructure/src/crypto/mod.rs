//! Cryptographic services
//!
//! - HS256 session and reset tokens ([`JwtTokenCodec`])
//! - bcrypt password hashing ([`BcryptPasswordHasher`])

mod jwt;
mod password;

pub use jwt::{JwtTokenCodec, TokenClaims};
pub use password::BcryptPasswordHasher;
