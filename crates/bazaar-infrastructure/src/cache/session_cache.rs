//! Session snapshot cache backed by a sharded concurrent map
//!
//! Entries never expire on their own; readers decide freshness. Writers to
//! the same key race benignly, last write wins.

use bazaar_domain::{CachedSession, SessionCache, UserId, UserProfile};
use dashmap::DashMap;

/// [`SessionCache`] over a [`DashMap`]
#[derive(Debug, Default)]
pub struct DashMapSessionCache {
    entries: DashMap<UserId, CachedSession>,
}

impl DashMapSessionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for DashMapSessionCache {
    fn get(&self, id: UserId) -> Option<CachedSession> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    fn put(&self, user: UserProfile) {
        self.entries.insert(user.id, CachedSession::new(user));
    }

    fn invalidate(&self, id: UserId) {
        if self.entries.remove(&id).is_some() {
            tracing::debug!(user_id = id, "session cache entry invalidated");
        }
    }

    fn clear(&self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "session cache cleared");
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
