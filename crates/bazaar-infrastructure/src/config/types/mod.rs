//! Configuration sections

mod app;
mod auth;
mod email;
mod logging;
mod server;
mod users;

pub use app::{AppConfig, Environment};
pub use auth::{AuthConfig, CookieConfig, JwtConfig};
pub use email::{EmailConfig, EmailProvider};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use users::UsersConfig;
