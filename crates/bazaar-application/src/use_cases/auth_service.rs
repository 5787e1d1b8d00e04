//! Authentication Service Use Case
//!
//! Login and logout plus the account flows around them: registration,
//! forgot/reset password and authenticated password change.
//!
//! Failures surface as [`AuthError`] values whose messages go straight to
//! the client. Store and hashing faults are logged and collapsed into
//! [`AuthError::Failed`].

use std::sync::Arc;

use bazaar_domain::constants::{FORGOT_PASSWORD_MESSAGE, HOME_PATH, PASSWORD_UPDATED_MESSAGE};
use bazaar_domain::{
    AuthError, Error, NewUser, PasswordHasher, Role, SessionCache, TokenCodec, UserId,
    UserProfile, UserRepository,
};
use serde::Deserialize;

use crate::mailer::{Mailer, templates};

/// Result of a user-facing auth operation
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub user: UserProfile,
    pub token: String,
    /// Local path the client should navigate to next
    pub redirect_to: String,
}

/// Registration form
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// New password with its confirmation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    fn validate(&self) -> AuthResult<()> {
        if self.password.is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Keep only same-site paths as post-login destinations
///
/// Anything that is not an absolute local path (including protocol-relative
/// `//host` forms) falls back to `/`.
pub fn sanitize_redirect(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => HOME_PATH.to_string(),
    }
}

/// Login, logout and account flows
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
    hasher: Arc<dyn PasswordHasher>,
    cache: Arc<dyn SessionCache>,
    mailer: Mailer,
    public_url: String,
}

impl AuthService {
    /// Create the service; `public_url` prefixes links in emails
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenCodec>,
        hasher: Arc<dyn PasswordHasher>,
        cache: Arc<dyn SessionCache>,
        mailer: Mailer,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
            cache,
            mailer,
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Verify credentials and issue a session token
    ///
    /// Unknown email and wrong password produce the same error. A
    /// deactivated account is reported distinctly, and only after the
    /// account has been found.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        redirect: Option<&str>,
    ) -> AuthResult<LoginSuccess> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| fault("Login", &e))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            tracing::info!(user_id = user.id, "login refused for deactivated account");
            return Err(AuthError::AccountDeactivated);
        }

        let Some(hash) = user.password_hash.clone() else {
            return Err(AuthError::InvalidCredentials);
        };

        if !self.check_password(password, hash).await {
            tracing::debug!(user_id = user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id, &user.email, user.effective_role())
            .map_err(|e| fault("Login", &e))?;

        tracing::info!(user_id = user.id, role = %user.effective_role(), "user logged in");
        Ok(LoginSuccess {
            user: user.profile(),
            token,
            redirect_to: sanitize_redirect(redirect),
        })
    }

    /// Drop the cached session of the token's subject, if recoverable
    ///
    /// Returns the invalidated user id. Tokens remain cryptographically
    /// valid until expiry; callers must delete the cookie themselves.
    pub fn logout(&self, token: Option<&str>) -> Option<UserId> {
        let claims = self.tokens.verify(token.filter(|t| !t.is_empty())?)?;
        self.cache.invalidate(claims.user_id);
        tracing::info!(user_id = claims.user_id, "user logged out");
        Some(claims.user_id)
    }

    /// Create a customer account and send the welcome email
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<UserProfile> {
        let email = request.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::Validation(
                "A valid email is required".to_string(),
            ));
        }
        PasswordChange {
            password: request.password.clone(),
            confirm_password: request.confirm_password,
        }
        .validate()?;

        let existing = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| fault("Registration", &e))?;
        if existing.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self
            .hash_password(request.password)
            .await
            .map_err(|e| fault("Registration", &e))?;

        let user = self
            .users
            .create(NewUser {
                email,
                password_hash: Some(password_hash),
                role: Role::Customer,
                is_active: true,
                first_name: non_empty(request.first_name),
                last_name: non_empty(request.last_name),
            })
            .await
            .map_err(|e| match e {
                Error::Auth(auth) => auth,
                other => fault("Registration", &other),
            })?;

        tracing::info!(user_id = user.id, "user registered");
        let profile = user.profile();
        self.mailer
            .dispatch(templates::welcome(&profile.email, profile.display_name()));
        Ok(profile)
    }

    /// Start a password reset
    ///
    /// The answer is the same whether or not the email is known.
    pub async fn forgot_password(&self, email: &str) -> AuthResult<&'static str> {
        let Some(user) = self
            .users
            .find_by_email(email.trim())
            .await
            .map_err(|e| fault("Password reset request", &e))?
        else {
            tracing::debug!("password reset requested for unknown email");
            return Ok(FORGOT_PASSWORD_MESSAGE);
        };

        let token = self
            .tokens
            .issue_reset(user.id, &user.email)
            .map_err(|e| fault("Password reset request", &e))?;
        let link = format!("{}/reset-password?token={token}", self.public_url);
        let profile = user.profile();

        tracing::info!(user_id = user.id, "password reset requested");
        self.mailer.dispatch(templates::password_reset(
            &profile.email,
            profile.display_name(),
            &link,
        ));
        Ok(FORGOT_PASSWORD_MESSAGE)
    }

    /// Set a new password using a reset token
    pub async fn reset_password(
        &self,
        token: &str,
        change: PasswordChange,
    ) -> AuthResult<&'static str> {
        change.validate()?;
        let claims = self
            .tokens
            .verify_reset(token)
            .ok_or(AuthError::InvalidResetToken)?;

        self.store_password(claims.user_id, change.password, "Password reset")
            .await?
            .then_some(PASSWORD_UPDATED_MESSAGE)
            .ok_or(AuthError::InvalidResetToken)
    }

    /// Change the password of the session's user
    pub async fn update_password(
        &self,
        session_token: Option<&str>,
        change: PasswordChange,
    ) -> AuthResult<&'static str> {
        change.validate()?;
        let token = session_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::NotAuthenticated)?;
        let claims = self.tokens.verify(token).ok_or(AuthError::InvalidToken)?;

        self.store_password(claims.user_id, change.password, "Password update")
            .await?
            .then_some(PASSWORD_UPDATED_MESSAGE)
            .ok_or(AuthError::InvalidToken)
    }

    async fn store_password(
        &self,
        user_id: UserId,
        password: String,
        operation: &'static str,
    ) -> AuthResult<bool> {
        let hash = self
            .hash_password(password)
            .await
            .map_err(|e| fault(operation, &e))?;
        let updated = self
            .users
            .update_password(user_id, &hash)
            .await
            .map_err(|e| fault(operation, &e))?;
        if updated {
            self.cache.invalidate(user_id);
            tracing::info!(user_id, "password changed");
        }
        Ok(updated)
    }

    async fn hash_password(&self, password: String) -> bazaar_domain::Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| Error::internal(format!("hashing task failed: {e}")))?
    }

    async fn check_password(&self, password: &str, hash: String) -> bool {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        match tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "stored password hash is unreadable");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "password verification task failed");
                false
            }
        }
    }
}

fn fault(operation: &'static str, error: &Error) -> AuthError {
    tracing::error!(operation, error = %error, "auth operation failed");
    AuthError::Failed(operation)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
