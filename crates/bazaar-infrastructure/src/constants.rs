//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-level lifetimes and literals live in `bazaar_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bazaar.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Application directory under the platform config dir
pub const APP_CONFIG_DIR: &str = "bazaar";

/// Environment variable prefix for configuration (`BAZAAR__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "BAZAAR";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Raw environment variable carrying the signing secret
pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";

/// Raw environment variable carrying the deployment environment
pub const APP_ENV_VAR: &str = "APP_ENV";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Issuer claim stamped on every token
pub const JWT_ISSUER: &str = "bazaar";

/// Audience of session tokens
pub const SESSION_AUDIENCE: &str = "session";

/// Audience of password reset tokens
pub const RESET_AUDIENCE: &str = "password-reset";

/// Minimum signing secret length in production
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Signing secret used outside production when none is configured
pub const DEV_FALLBACK_JWT_SECRET: &str = "bazaar-development-secret-do-not-use-in-production";

/// Lowest bcrypt cost accepted
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted
pub const BCRYPT_MAX_COST: u32 = 31;

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default externally visible base URL, used in email links
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "BAZAAR_LOG";

/// File stem for rolling log files when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "bazaar";

// ============================================================================
// EMAIL CONSTANTS
// ============================================================================

/// Default sender address
pub const DEFAULT_EMAIL_FROM: &str = "Bazaar <no-reply@bazaar.local>";

/// Timeout for outbound email API calls in seconds
pub const EMAIL_HTTP_TIMEOUT_SECS: u64 = 10;
