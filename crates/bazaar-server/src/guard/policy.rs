//! Per-request access decision
//!
//! Stateless: the decision depends only on the path, the session cookie and
//! the token codec. Role checks read the role baked into the token; handlers
//! that need current account state go through the session resolver.
//!
//! | Path | No cookie | Invalid token | Wrong role | Otherwise |
//! |------|-----------|---------------|------------|-----------|
//! | exempt / public | allow | allow | allow | allow |
//! | `/booking…`, `/orders…`, `/profile…` | login | allow | allow | allow |
//! | `/admin…` | login | `/login` | `/` | allow |
//! | `/provider…` | login | `/login` | `/` | allow |
//!
//! Exempt and public paths match on segment boundaries. Protected areas
//! match on the raw prefix, so `/administrator` and `/bookings` are guarded
//! too.

use bazaar_domain::constants::{
    ADMIN_PATH_PREFIX, HOME_PATH, LOGIN_PATH, PROTECTED_PATHS, PROVIDER_PATH_PREFIX,
    PUBLIC_PATHS, REDIRECT_QUERY_PARAM,
};
use bazaar_domain::{Role, TokenCodec};

use crate::constants::{API_PREFIX, GUARD_REDIRECT_ROUTE, STATIC_PREFIXES};

/// Outcome of [`evaluate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the client to this location instead
    Redirect(String),
}

/// True when `path` is `prefix` or lies below it
///
/// `/administrator` does not match `/admin`.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

fn matches_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| matches_prefix(path, prefix))
}

fn is_exempt(path: &str) -> bool {
    matches_prefix(path, API_PREFIX)
        || matches_prefix(path, GUARD_REDIRECT_ROUTE)
        || matches_any(path, STATIC_PREFIXES)
}

fn is_public(path: &str) -> bool {
    path == HOME_PATH || matches_any(path, PUBLIC_PATHS)
}

fn login_redirect(path: &str) -> GuardDecision {
    GuardDecision::Redirect(format!(
        "{LOGIN_PATH}?{REDIRECT_QUERY_PARAM}={}",
        urlencoding::encode(path)
    ))
}

fn role_gate(token: &str, tokens: &dyn TokenCodec, allowed: fn(Role) -> bool) -> GuardDecision {
    match tokens.verify(token) {
        None => GuardDecision::Redirect(LOGIN_PATH.to_string()),
        Some(claims) if !allowed(claims.role) => GuardDecision::Redirect(HOME_PATH.to_string()),
        Some(_) => GuardDecision::Allow,
    }
}

/// Decide whether a request for `path` may proceed
///
/// `path` is the decoded request path without query. An empty cookie counts
/// as no cookie.
pub fn evaluate(path: &str, token: Option<&str>, tokens: &dyn TokenCodec) -> GuardDecision {
    if is_exempt(path) || is_public(path) {
        return GuardDecision::Allow;
    }
    if !PROTECTED_PATHS.iter().any(|prefix| path.starts_with(prefix)) {
        return GuardDecision::Allow;
    }

    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return login_redirect(path);
    };

    if path.starts_with(ADMIN_PATH_PREFIX) {
        role_gate(token, tokens, Role::is_admin)
    } else if path.starts_with(PROVIDER_PATH_PREFIX) {
        role_gate(token, tokens, Role::is_provider)
    } else {
        GuardDecision::Allow
    }
}
