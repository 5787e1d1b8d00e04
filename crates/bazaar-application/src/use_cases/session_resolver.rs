//! Session Resolver Use Case
//!
//! Turns the credential token of a request into the authenticated user.
//! Lookups go through the session cache first; a fresh entry short-circuits
//! the credential store.

use std::sync::Arc;
use std::time::Duration;

use bazaar_domain::{SessionCache, TokenCodec, UserProfile, UserRepository};

/// Resolves request tokens to users
#[derive(Clone)]
pub struct SessionResolver {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
    cache: Arc<dyn SessionCache>,
    ttl: Duration,
}

impl SessionResolver {
    /// Create a resolver with the given cache freshness window
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenCodec>,
        cache: Arc<dyn SessionCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            users,
            tokens,
            cache,
            ttl,
        }
    }

    /// The authenticated user for `token`, or `None`
    ///
    /// A missing, empty or invalid token yields `None`, as does a token for
    /// a user no longer in the store. Store faults are logged and also
    /// yield `None`. The active flag is not consulted here; handlers that
    /// care check `is_active` on the returned profile.
    pub async fn resolve(&self, token: Option<&str>) -> Option<UserProfile> {
        let token = token.filter(|t| !t.is_empty())?;
        let claims = self.tokens.verify(token)?;

        if let Some(entry) = self.cache.get(claims.user_id)
            && entry.is_fresh(self.ttl)
        {
            tracing::trace!(user_id = claims.user_id, "session cache hit");
            return Some(entry.user);
        }

        match self.users.find_profile(claims.user_id).await {
            Ok(Some(user)) => {
                self.cache.put(user.clone());
                Some(user)
            }
            Ok(None) => {
                tracing::debug!(user_id = claims.user_id, "token subject no longer exists");
                None
            }
            Err(e) => {
                tracing::warn!(user_id = claims.user_id, error = %e, "session lookup failed");
                None
            }
        }
    }

    /// Shared cache handle
    pub fn cache(&self) -> &Arc<dyn SessionCache> {
        &self.cache
    }

    /// Shared token codec handle
    pub fn tokens(&self) -> &Arc<dyn TokenCodec> {
        &self.tokens
    }
}
