//! Authentication configuration types

use serde::{Deserialize, Serialize};

use bazaar_domain::constants::{
    AUTH_COOKIE_NAME, DEFAULT_BCRYPT_COST, RESET_TOKEN_LIFETIME_SECS, SESSION_CACHE_TTL_SECS,
    SESSION_TOKEN_LIFETIME_SECS,
};

use crate::constants::JWT_ISSUER;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// HMAC signing secret
    ///
    /// **REQUIRED** in production, at least 32 characters. Configure via
    /// `JWT_SECRET`, `BAZAAR__AUTH__JWT__SECRET` or `auth.jwt.secret`.
    pub secret: String,

    /// Session token lifetime in seconds
    pub expiration_secs: u64,

    /// Password reset token lifetime in seconds
    pub reset_expiration_secs: u64,

    /// Issuer claim
    pub issuer: String,
}

/// Returns default JWT configuration with:
/// - Empty secret (filled by the loader, mandatory in production)
/// - 7 day sessions and 1 hour reset links
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_secs: SESSION_TOKEN_LIFETIME_SECS,
            reset_expiration_secs: RESET_TOKEN_LIFETIME_SECS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Force the `Secure` attribute on or off; unset follows the environment
    pub secure: Option<bool>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: AUTH_COOKIE_NAME.to_string(),
            secure: None,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Freshness window of the session cache in seconds
    pub session_cache_ttl_secs: u64,

    /// bcrypt work factor for new hashes
    pub bcrypt_cost: u32,

    /// Session cookie
    pub cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            session_cache_ttl_secs: SESSION_CACHE_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cookie: CookieConfig::default(),
        }
    }
}
