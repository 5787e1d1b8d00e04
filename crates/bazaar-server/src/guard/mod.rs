//! Route guard
//!
//! [`policy`] decides, [`fairing`] applies the decision to live requests.

pub mod fairing;
pub mod policy;

pub use fairing::{GuardTarget, RouteGuard, guard_redirect};
pub use policy::{GuardDecision, evaluate, matches_prefix};
