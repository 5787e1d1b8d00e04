//! Session Cache Port
//!
//! Process-local map from user id to the last fetched profile snapshot.
//! The cache does not judge freshness; callers compare
//! [`CachedSession::is_fresh`] against their TTL and treat a stale hit as a
//! miss. There is no size bound and no background sweep.

use crate::entities::{UserId, UserProfile};
use crate::value_objects::CachedSession;

/// Shared session snapshot cache
///
/// Implementations must tolerate concurrent get/put/invalidate from many
/// request tasks. Concurrent writers to the same key resolve last-write-wins.
pub trait SessionCache: Send + Sync {
    /// Entry for `id`, fresh or not
    fn get(&self, id: UserId) -> Option<CachedSession>;

    /// Insert or overwrite the entry for the profile's id, stamped now
    fn put(&self, user: UserProfile);

    /// Drop the entry for `id`
    fn invalidate(&self, id: UserId);

    /// Drop every entry
    fn clear(&self);

    /// Number of entries, stale ones included
    fn len(&self) -> usize;

    /// True when the cache holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
