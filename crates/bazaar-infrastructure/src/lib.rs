//! # Infrastructure Layer
//!
//! Technical adapters behind the domain ports, plus configuration and
//! logging.
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | HS256 token codec, bcrypt password hashing |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | DashMap session snapshot cache |
//! | [`repositories`] | In-memory credential store with JSON seeding |
//! | [`email`] | Log and HTTP email senders |
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | figment layered configuration |
//! | [`di`] | Composition root ([`AppContext`]) |
//! | [`constants`] | Infrastructure defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | tracing subscriber setup |

pub mod cache;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod email;
pub mod error_ext;
pub mod logging;
pub mod repositories;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
