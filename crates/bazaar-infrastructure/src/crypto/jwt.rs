//! HS256 token codec
//!
//! Session and password reset tokens share the signing secret and issuer
//! but carry different audiences, so one can never stand in for the other.
//! Expiry is checked with zero leeway.

use bazaar_domain::error::{Error, Result};
use bazaar_domain::{ResetClaims, Role, SessionClaims, TokenCodec, UserId};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::constants::{RESET_AUDIENCE, SESSION_AUDIENCE};
use crate::error_ext::ErrorContext;

/// Wire form of a token payload
///
/// `role` is present on session tokens only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub iat: i64,
    pub exp: i64,
    pub aud: String,
    pub iss: String,
}

/// JWT implementation of [`TokenCodec`]
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    session_ttl_secs: i64,
    reset_ttl_secs: i64,
}

impl JwtTokenCodec {
    /// Create a codec from the JWT configuration section
    pub fn new(config: &JwtConfig) -> Result<Self> {
        if config.secret.is_empty() {
            return Err(Error::configuration("JWT secret cannot be empty"));
        }
        let session_ttl_secs = i64::try_from(config.expiration_secs)
            .config_context("Session token lifetime out of range")?;
        let reset_ttl_secs = i64::try_from(config.reset_expiration_secs)
            .config_context("Reset token lifetime out of range")?;
        Ok(Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            session_ttl_secs,
            reset_ttl_secs,
        })
    }

    /// Sign an arbitrary payload with this codec's key
    ///
    /// Lets callers mint tokens with chosen timestamps, e.g. already
    /// expired ones.
    pub fn encode_claims(&self, claims: &TokenClaims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .auth_context("Token signing failed")
    }

    /// Claims for `user_id` issued now under `audience`
    pub fn claims_for(
        &self,
        user_id: UserId,
        email: &str,
        role: Option<Role>,
        audience: &str,
        ttl_secs: i64,
    ) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            user_id,
            email: email.to_string(),
            role,
            iat: now,
            exp: now + ttl_secs,
            aud: audience.to_string(),
            iss: self.issuer.clone(),
        }
    }

    fn decode_for(&self, token: &str, audience: &str) -> Option<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_audience(&[audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        match decode::<TokenClaims>(token, &self.decoding, &validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(audience, error = %e, "token rejected");
                None
            }
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, user_id: UserId, email: &str, role: Role) -> Result<String> {
        let claims = self.claims_for(
            user_id,
            email,
            Some(role),
            SESSION_AUDIENCE,
            self.session_ttl_secs,
        );
        self.encode_claims(&claims)
    }

    fn verify(&self, token: &str) -> Option<SessionClaims> {
        let claims = self.decode_for(token, SESSION_AUDIENCE)?;
        Some(SessionClaims {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role.unwrap_or(Role::User),
            iat: claims.iat,
            exp: claims.exp,
        })
    }

    fn issue_reset(&self, user_id: UserId, email: &str) -> Result<String> {
        let claims = self.claims_for(user_id, email, None, RESET_AUDIENCE, self.reset_ttl_secs);
        self.encode_claims(&claims)
    }

    fn verify_reset(&self, token: &str) -> Option<ResetClaims> {
        let claims = self.decode_for(token, RESET_AUDIENCE)?;
        Some(ResetClaims {
            user_id: claims.user_id,
            email: claims.email,
            iat: claims.iat,
            exp: claims.exp,
        })
    }
}
