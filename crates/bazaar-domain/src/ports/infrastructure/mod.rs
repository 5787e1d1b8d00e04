//! Infrastructure service ports

/// Session cache port
pub mod session_cache;

pub use session_cache::SessionCache;
