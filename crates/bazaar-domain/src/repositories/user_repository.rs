//! User Repository Interface
//!
//! The credential store boundary. Implementations may be backed by any
//! store; the workspace ships an in-memory one.

use async_trait::async_trait;

use crate::entities::{NewUser, User, UserId, UserProfile, UserUpdate};
use crate::error::Result;

/// Repository: credential store operations
///
/// Lookups return `Ok(None)` for a missing record. `Err` is reserved for
/// store faults.
///
/// # Example
///
/// ```ignore
/// let user = repo.find_by_email("ana@example.com").await?;
/// let profile = repo.find_profile(42).await?;
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Full record by email, including the credential hash
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Session projection by id
    async fn find_profile(&self, id: UserId) -> Result<Option<UserProfile>>;

    /// Insert a new record and assign its id
    ///
    /// Fails with [`crate::AuthError::EmailTaken`] when the email exists.
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Replace the credential hash; `Ok(false)` if the user does not exist
    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<bool>;

    /// Apply an administrative update, returning the new projection
    async fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<Option<UserProfile>>;

    /// All users as session projections, in no particular order
    async fn list_profiles(&self) -> Result<Vec<UserProfile>>;
}
