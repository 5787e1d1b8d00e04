//! # Bazaar
//!
//! Authentication and authorization core for a service-booking marketplace:
//! signed session tokens in an `HttpOnly` cookie, a short-lived cache of
//! user snapshots, a per-request route guard with role-scoped areas, and the
//! account flows around them (registration, password reset, admin user
//! management, notification email).
//!
//! ## Architecture
//!
//! - `domain` - entities, roles, errors and ports
//! - `application` - session resolution and account use cases
//! - `infrastructure` - configuration, logging, token codec, hashing, stores
//! - `server` - Rocket routes, guard fairing and entry point

pub mod cli;

/// Domain layer - entities, value objects and ports
pub mod domain {
    pub use bazaar_domain::*;
}

/// Application layer - use cases
pub mod application {
    pub use bazaar_application::*;
}

/// Infrastructure layer - configuration, adapters and bootstrap
pub mod infrastructure {
    pub use bazaar_infrastructure::*;
}

/// Server layer - HTTP surface
pub mod server {
    pub use bazaar_server::*;
}

pub use bazaar_domain::{AuthError, Error, Result, Role, UserProfile};
pub use bazaar_server::run;
pub use cli::Cli;
