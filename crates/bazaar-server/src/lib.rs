//! # Bazaar HTTP Server
//!
//! Rocket front end for the authentication core.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`guard`] | Route guard policy and the request fairing that applies it |
//! | [`session`] | Request guards exposing the session token and resolved user |
//! | [`cookies`] | Session cookie construction and removal |
//! | [`routes`] | Auth API, admin API, pages and health check |
//! | [`builder`] | Assembles the Rocket instance around an [`AppContext`] |
//! | [`init`] | Process entry point: config, logging, bootstrap, launch |
//!
//! [`AppContext`]: bazaar_infrastructure::AppContext

pub mod builder;
pub mod constants;
pub mod cookies;
pub mod guard;
pub mod init;
pub mod response;
pub mod routes;
pub mod session;

pub use builder::build_rocket;
pub use guard::{GuardDecision, RouteGuard, evaluate};
pub use init::run;
pub use session::{OptionalUser, SessionToken};
