//! Server constants

/// Internal route that answers requests the guard turned away
pub const GUARD_REDIRECT_ROUTE: &str = "/__guard/redirect";

/// API prefix; API routes enforce their own authorization
pub const API_PREFIX: &str = "/api";

/// Static asset prefixes skipped by the guard
pub const STATIC_PREFIXES: &[&str] = &["/static", "/assets", "/_next", "/favicon.ico", "/robots.txt"];

/// Liveness endpoint
pub const HEALTH_PATH: &str = "/health";
