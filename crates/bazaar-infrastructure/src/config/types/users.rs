//! Credential store configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Credential store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// JSON file of user records loaded at startup
    pub seed_path: Option<PathBuf>,
}
