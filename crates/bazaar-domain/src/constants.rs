//! Domain layer constants
//!
//! Lifetimes, cookie naming, route classification lists and the user-facing
//! literals shared by the application and server layers. Infrastructure
//! defaults (config file names, env prefixes) live in the infrastructure crate.

// ============================================================================
// TOKEN AND SESSION LIFETIMES
// ============================================================================

/// Session token lifetime in seconds (7 days)
pub const SESSION_TOKEN_LIFETIME_SECS: u64 = 7 * 24 * 60 * 60;

/// Password reset token lifetime in seconds (1 hour)
pub const RESET_TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// Freshness window for cached session snapshots (5 minutes)
pub const SESSION_CACHE_TTL_SECS: u64 = 5 * 60;

/// Default bcrypt work factor for new password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 12;

// ============================================================================
// COOKIE
// ============================================================================

/// Name of the cookie that carries the session token
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// Cookie max-age in seconds, equal to the token lifetime
pub const AUTH_COOKIE_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

// ============================================================================
// ROUTE CLASSIFICATION
// ============================================================================

/// Site root, always public
pub const HOME_PATH: &str = "/";

/// Login page
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the post-login destination
pub const REDIRECT_QUERY_PARAM: &str = "redirect";

/// Paths reachable without a session (segment-prefix match)
pub const PUBLIC_PATHS: &[&str] = &[
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
    "/auth/callback",
    "/services",
    "/about",
];

/// Paths that need a session cookie (segment-prefix match)
pub const PROTECTED_PATHS: &[&str] = &["/booking", "/orders", "/profile", "/admin", "/provider"];

/// Prefix of the administrator area
pub const ADMIN_PATH_PREFIX: &str = "/admin";

/// Prefix of the service provider area
pub const PROVIDER_PATH_PREFIX: &str = "/provider";

// ============================================================================
// USER-FACING MESSAGES
// ============================================================================

/// Answer to every forgot-password request, known email or not
pub const FORGOT_PASSWORD_MESSAGE: &str =
    "If an account with this email exists, you will receive a password reset email.";

/// Successful logout
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Logout of a request that carried no session cookie
pub const LOGOUT_NO_TOKEN_MESSAGE: &str = "Logged out successfully (no token found)";

/// Successful password reset or update
pub const PASSWORD_UPDATED_MESSAGE: &str = "Password updated successfully";
