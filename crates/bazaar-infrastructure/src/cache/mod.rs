//! Process-local caches

mod session_cache;

pub use session_cache::DashMapSessionCache;
