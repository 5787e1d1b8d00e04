//! Top-level application configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AuthConfig, EmailConfig, LoggingConfig, ServerConfig, UsersConfig};

/// Deployment environment
///
/// Selects production hardening: the signing secret becomes mandatory and
/// the session cookie is marked `Secure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
    Test,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        })
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub email: EmailConfig,
    pub users: UsersConfig,
}

impl AppConfig {
    /// Whether the session cookie carries the `Secure` attribute
    ///
    /// An explicit `auth.cookie.secure` wins; otherwise only production
    /// sets it.
    pub fn cookie_secure(&self) -> bool {
        self.auth
            .cookie
            .secure
            .unwrap_or_else(|| self.environment.is_production())
    }
}
