//! Password Hashing Port

use crate::error::Result;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash
    ///
    /// `Err` means the hash could not be parsed, not that the password is
    /// wrong.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}
