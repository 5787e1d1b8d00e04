//! Application Layer - Bazaar
//!
//! Use cases of the authentication and authorization core, written against
//! the port traits of `bazaar-domain` only.
//!
//! ## Use Cases
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`SessionResolver`] | Token to authenticated user, through the session cache |
//! | [`AuthService`] | Login, logout, registration, password reset and update |
//! | [`UserAdminService`] | Role-gated listing and updating of users |
//! | [`NotificationService`] | Booking notification emails |
//!
//! Outbound email goes through [`Mailer`], which never lets a delivery
//! failure reach the caller.

pub mod mailer;
pub mod use_cases;

pub use mailer::Mailer;
pub use use_cases::*;
