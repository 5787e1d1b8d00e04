//! User Administration Use Case
//!
//! Listing is open to `admin` and `super_admin`; changing a user's role or
//! active flag is reserved for `super_admin`.

use std::sync::Arc;

use bazaar_domain::{
    AuthError, Error, Result, SessionCache, UserId, UserProfile, UserRepository, UserUpdate,
};

/// Administrative operations on user records
#[derive(Clone)]
pub struct UserAdminService {
    users: Arc<dyn UserRepository>,
    cache: Arc<dyn SessionCache>,
}

impl UserAdminService {
    pub fn new(users: Arc<dyn UserRepository>, cache: Arc<dyn SessionCache>) -> Self {
        Self { users, cache }
    }

    /// All users, newest first
    pub async fn list_users(&self, actor: Option<&UserProfile>) -> Result<Vec<UserProfile>> {
        let actor = actor.ok_or(AuthError::NotAuthenticated)?;
        if !actor.role.is_admin() {
            return Err(AuthError::Forbidden.into());
        }

        let mut users = self.users.list_profiles().await?;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    /// Change role and/or active flag of user `id`
    ///
    /// The target's cached session is dropped so the change is visible on
    /// its next request.
    pub async fn update_user(
        &self,
        actor: Option<&UserProfile>,
        id: Option<UserId>,
        update: UserUpdate,
    ) -> Result<UserProfile> {
        let actor = actor.ok_or(AuthError::NotAuthenticated)?;
        if !actor.role.is_super_admin() {
            return Err(AuthError::Forbidden.into());
        }
        let id = id.ok_or_else(|| AuthError::Validation("User ID is required".to_string()))?;

        let updated = self
            .users
            .update_user(id, &update)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {id}")))?;

        self.cache.invalidate(id);
        tracing::info!(
            actor_id = actor.id,
            user_id = id,
            role = ?update.role,
            is_active = ?update.is_active,
            "user updated"
        );
        Ok(updated)
    }
}
