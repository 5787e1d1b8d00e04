//! Password hashing service using bcrypt

use bazaar_domain::PasswordHasher;
use bazaar_domain::error::Result;

use crate::error_ext::ErrorContext;

/// bcrypt password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher; `cost` must be in `4..=31`
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).auth_context("Password hashing failed")
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).auth_context("Invalid password hash format")
    }
}
