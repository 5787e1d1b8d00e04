//! HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PUBLIC_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Externally visible base URL, used to build links in emails
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}
