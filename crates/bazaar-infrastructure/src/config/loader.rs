//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values, then validates the result.

use std::env;
use std::path::{Path, PathBuf};

use bazaar_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::{AppConfig, AuthConfig, EmailConfig, Environment, LoggingConfig, ServerConfig};
use crate::config::types::EmailProvider;
use crate::constants::{
    APP_CONFIG_DIR, APP_ENV_VAR, BCRYPT_MAX_COST, BCRYPT_MIN_COST, CONFIG_ENV_PREFIX,
    CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, DEV_FALLBACK_JWT_SECRET,
    JWT_SECRET_ENV_VAR, MIN_JWT_SECRET_LENGTH,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default found)
    /// 3. Prefixed environment variables, nested with `__`
    ///    (e.g. `BAZAAR__SERVER__PORT`)
    /// 4. `JWT_SECRET` and `APP_ENV`
    ///
    /// An unset signing secret is replaced by a development fallback
    /// outside production and rejected in production.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment
            .merge(
                Env::prefixed(&format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}"))
                    .split(CONFIG_ENV_SEPARATOR),
            )
            .merge(
                Env::raw()
                    .only(&[JWT_SECRET_ENV_VAR])
                    .map(|_| "auth.jwt.secret".into()),
            )
            .merge(
                Env::raw()
                    .only(&[APP_ENV_VAR])
                    .map(|_| "environment".into()),
            );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        resolve_jwt_secret(&mut app_config)?;
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Write `config` to `path` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let rendered =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), rendered).io_context("Failed to write config file")?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(APP_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill or reject an empty signing secret depending on the environment
fn resolve_jwt_secret(config: &mut AppConfig) -> Result<()> {
    if !config.auth.jwt.secret.is_empty() {
        return Ok(());
    }
    if config.environment.is_production() {
        return Err(Error::configuration(format!(
            "JWT secret must be configured in production (set {JWT_SECRET_ENV_VAR})"
        )));
    }
    tracing::warn!(
        environment = %config.environment,
        "no JWT secret configured, using the development fallback"
    );
    config.auth.jwt.secret = DEV_FALLBACK_JWT_SECRET.to_string();
    Ok(())
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_auth_config(&config.auth, config.environment)?;
    validate_logging_config(&config.logging)?;
    validate_email_config(&config.email)?;
    Ok(())
}

fn validate_server_config(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_auth_config(auth: &AuthConfig, environment: Environment) -> Result<()> {
    if auth.jwt.secret.is_empty() {
        return Err(Error::configuration("JWT secret cannot be empty"));
    }
    if environment.is_production() && auth.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret should be at least {MIN_JWT_SECRET_LENGTH} characters long"
        )));
    }
    if auth.jwt.expiration_secs == 0 || auth.jwt.reset_expiration_secs == 0 {
        return Err(Error::configuration("Token lifetimes cannot be 0"));
    }
    if auth.session_cache_ttl_secs == 0 {
        return Err(Error::configuration("Session cache TTL cannot be 0"));
    }
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&auth.bcrypt_cost) {
        return Err(Error::configuration(format!(
            "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}"
        )));
    }
    if auth.cookie.name.is_empty() {
        return Err(Error::configuration("Cookie name cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    crate::logging::parse_log_level(&logging.level).map(|_| ())
}

fn validate_email_config(email: &EmailConfig) -> Result<()> {
    if email.provider == EmailProvider::Http && email.endpoint.as_deref().is_none_or(str::is_empty)
    {
        return Err(Error::configuration(
            "Email endpoint is required for the http provider",
        ));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
///
/// Used by tests and embedders that do not read files or the environment.
/// [`ConfigBuilder::build`] applies the same secret resolution and
/// validation as [`ConfigLoader::load`].
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set the deployment environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set authentication configuration
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the signing secret only
    pub fn with_jwt_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.auth.jwt.secret = secret.into();
        self
    }

    /// Set the bcrypt cost only
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.auth.bcrypt_cost = cost;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set email configuration
    pub fn with_email(mut self, email: EmailConfig) -> Self {
        self.config.email = email;
        self
    }

    /// Resolve the secret, validate and return the configuration
    pub fn build(self) -> Result<AppConfig> {
        let mut config = self.config;
        resolve_jwt_secret(&mut config)?;
        validate_app_config(&config)?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
