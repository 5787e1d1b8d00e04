//! JSON error responses
//!
//! Every API failure answers `{"success": false, "error": "<message>"}` with
//! a status derived from the error kind.

use bazaar_domain::AuthError;
use bazaar_domain::error::Error;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Request, catch};
use serde_json::json;

/// API error with its HTTP status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Status,
    pub message: String,
}

impl ApiError {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(Status::Unauthorized, "Unauthorized")
    }

    pub fn forbidden() -> Self {
        Self::new(Status::Forbidden, "Forbidden")
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, message)
    }

    pub fn internal() -> Self {
        Self::new(Status::InternalServerError, "Internal server error")
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match &err {
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::InvalidToken => Status::Unauthorized,
            AuthError::AccountDeactivated | AuthError::Forbidden => Status::Forbidden,
            AuthError::PasswordMismatch
            | AuthError::InvalidResetToken
            | AuthError::Validation(_) => Status::BadRequest,
            AuthError::EmailTaken => Status::Conflict,
            AuthError::Failed(_) => Status::InternalServerError,
        };
        Self::new(status, err.to_string())
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Auth(auth) => auth.into(),
            Error::NotFound { resource } => {
                Self::new(Status::NotFound, format!("Not found: {resource}"))
            }
            Error::InvalidArgument { message } => Self::bad_request(message),
            other => {
                tracing::error!(error = %other, "request failed");
                Self::internal()
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (
            self.status,
            Json(json!({ "success": false, "error": self.message })),
        )
            .respond_to(request)
    }
}

/// Catch-all for statuses produced outside handlers, e.g. malformed bodies
#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<serde_json::Value>) {
    let message = status.reason().unwrap_or("Request failed");
    (status, Json(json!({ "success": false, "error": message })))
}
