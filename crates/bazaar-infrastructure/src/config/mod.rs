//! Configuration
//!
//! Typed configuration sections plus the figment-based [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, AuthConfig, CookieConfig, EmailConfig, EmailProvider, Environment, JwtConfig,
    LoggingConfig, ServerConfig, UsersConfig,
};
