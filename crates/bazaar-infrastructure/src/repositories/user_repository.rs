//! In-memory credential store
//!
//! Records live in a [`DashMap`] keyed by id, with a second map enforcing
//! email uniqueness. The store can be seeded from a JSON array of user
//! records at startup.

use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use bazaar_domain::error::{Error, Result};
use bazaar_domain::{
    AuthError, NewUser, User, UserId, UserProfile, UserRepository, UserUpdate,
};
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error_ext::ErrorContext;

/// [`UserRepository`] held in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<UserId, User>,
    emails: DashMap<String, UserId>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records
    ///
    /// Fails on duplicate ids or emails.
    pub fn from_users(users: Vec<User>) -> Result<Self> {
        let repo = Self::new();
        for user in users {
            if repo.users.contains_key(&user.id) {
                return Err(Error::invalid_argument(format!("duplicate user id {}", user.id)));
            }
            match repo.emails.entry(user.email.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::invalid_argument(format!(
                        "duplicate user email {}",
                        user.email
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(user.id);
                }
            }
            repo.next_id.fetch_max(user.id, Ordering::SeqCst);
            repo.users.insert(user.id, user);
        }
        Ok(repo)
    }

    /// Load records from a JSON seed file
    pub async fn load_seed(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .io_context(format!("Failed to read user seed {}", path.display()))?;
        let users: Vec<User> = serde_json::from_str(&raw)
            .db_context(format!("Invalid user seed {}", path.display()))?;
        let repo = Self::from_users(users)?;
        tracing::info!(path = %path.display(), users = repo.users.len(), "user store seeded");
        Ok(repo)
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let Some(id) = self.emails.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }

    async fn find_profile(&self, id: UserId) -> Result<Option<UserProfile>> {
        Ok(self.users.get(&id).map(|user| user.profile()))
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let slot = match self.emails.entry(new_user.email.clone()) {
            Entry::Occupied(_) => return Err(AuthError::EmailTaken.into()),
            Entry::Vacant(slot) => slot,
        };

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: Some(new_user.role),
            is_active: new_user.is_active,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            image_url: None,
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        slot.insert(id);
        Ok(user)
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<bool> {
        Ok(match self.users.get_mut(&id) {
            Some(mut user) => {
                user.password_hash = Some(password_hash.to_string());
                true
            }
            None => false,
        })
    }

    async fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<Option<UserProfile>> {
        Ok(self.users.get_mut(&id).map(|mut user| {
            if let Some(role) = update.role {
                user.role = Some(role);
            }
            if let Some(is_active) = update.is_active {
                user.is_active = is_active;
            }
            user.profile()
        }))
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>> {
        Ok(self.users.iter().map(|user| user.profile()).collect())
    }
}
