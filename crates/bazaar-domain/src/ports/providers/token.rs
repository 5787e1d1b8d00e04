//! Token Codec Port

use crate::entities::UserId;
use crate::error::Result;
use crate::value_objects::{ResetClaims, Role, SessionClaims};

/// Issues and verifies signed, time-limited tokens
///
/// Verification never fails loudly: a bad signature, wrong audience,
/// malformed token or elapsed expiry all yield `None`. Session and reset
/// tokens are not interchangeable.
pub trait TokenCodec: Send + Sync {
    /// Sign a session token valid for the configured session lifetime
    fn issue(&self, user_id: UserId, email: &str, role: Role) -> Result<String>;

    /// Claims of a valid session token
    fn verify(&self, token: &str) -> Option<SessionClaims>;

    /// Sign a password reset token valid for the configured reset lifetime
    fn issue_reset(&self, user_id: UserId, email: &str) -> Result<String>;

    /// Claims of a valid password reset token
    fn verify_reset(&self, token: &str) -> Option<ResetClaims>;
}
