//! Application Use Cases

/// Login, logout and account flows
pub mod auth_service;
/// Booking notification emails
pub mod notification_service;
/// Token to user resolution
pub mod session_resolver;
/// Administrative user management
pub mod user_admin;

pub use auth_service::{
    AuthResult, AuthService, LoginSuccess, PasswordChange, RegisterRequest, sanitize_redirect,
};
pub use notification_service::NotificationService;
pub use session_resolver::SessionResolver;
pub use user_admin::UserAdminService;
