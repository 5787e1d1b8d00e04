//! User entity and its projections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

/// Unique, immutable user identifier
pub type UserId = i64;

/// A user record as held by the credential store
///
/// `password_hash` is `None` for accounts created through an external
/// identity provider; such accounts cannot log in with a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Role used for authorization decisions
    ///
    /// A record without a role tag is treated as the least-privileged
    /// [`Role::User`].
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(Role::User)
    }

    /// Project the record into its session view, dropping the hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            role: self.effective_role(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            image_url: self.image_url.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// The minimal user projection carried by sessions
///
/// Never contains credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Name used to greet the user in emails
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("there")
    }
}

/// Input for creating a user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Administrative changes applied to an existing user
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UserUpdate {
    /// True when the update would not change anything
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.is_active.is_none()
    }
}
