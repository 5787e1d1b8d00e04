//! Session value objects

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::entities::{UserId, UserProfile};
use crate::value_objects::Role;

/// Verified payload of a session token
///
/// `iat` and `exp` are Unix timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Verified payload of a password reset token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetClaims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// A user snapshot held by the session cache
///
/// Ages against the tokio clock, so a paused runtime controls freshness.
#[derive(Debug, Clone)]
pub struct CachedSession {
    pub user: UserProfile,
    pub fetched_at: Instant,
}

impl CachedSession {
    /// Snapshot taken now
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            fetched_at: Instant::now(),
        }
    }

    /// Fresh iff strictly less than `ttl` has elapsed since the fetch
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}
