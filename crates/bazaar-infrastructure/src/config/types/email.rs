//! Outbound email configuration

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EMAIL_FROM;

/// Email delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Write messages to the log only
    #[default]
    Log,
    /// POST messages to an HTTP email API
    Http,
}

/// Outbound email configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub provider: EmailProvider,

    /// Sender address
    pub from: String,

    /// Email API endpoint, required for the `http` provider
    pub endpoint: Option<String>,

    /// Bearer token for the email API
    pub api_key: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Log,
            from: DEFAULT_EMAIL_FROM.to_string(),
            endpoint: None,
            api_key: None,
        }
    }
}
