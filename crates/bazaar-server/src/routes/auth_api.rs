//! Authentication API
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | POST | `/api/auth/login` | `{email, password, redirect?}` |
//! | POST | `/api/auth/logout` | none |
//! | POST | `/api/auth/register` | `{firstName, lastName, email, password, confirmPassword}` |
//! | POST | `/api/auth/forgot-password` | `{email}` |
//! | POST | `/api/auth/reset-password` | `{token, password, confirmPassword}` |
//! | POST | `/api/auth/password` | `{password, confirmPassword}` |
//! | GET | `/api/auth/session` | none |

use bazaar_application::{PasswordChange, RegisterRequest};
use bazaar_domain::UserProfile;
use bazaar_domain::constants::{LOGOUT_MESSAGE, LOGOUT_NO_TOKEN_MESSAGE};
use bazaar_infrastructure::AppContext;
use rocket::http::{CookieJar, Status};
use rocket::serde::json::Json;
use rocket::{Route, State, get, post, routes};
use serde::{Deserialize, Serialize};

use crate::cookies::{clear_session, set_session};
use crate::response::ApiError;
use crate::session::{OptionalUser, SessionToken};

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserProfile,
    pub redirect_to: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    fn ok(message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            message,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// Verify credentials and set the session cookie
///
/// The destination may come from the body or the `redirect` query parameter.
#[post("/api/auth/login?<redirect>", format = "json", data = "<body>")]
pub async fn login(
    context: &State<AppContext>,
    cookies: &CookieJar<'_>,
    redirect: Option<String>,
    body: Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let body = body.into_inner();
    let destination = body.redirect.or(redirect);
    let success = context
        .auth()
        .login(&body.email, &body.password, destination.as_deref())
        .await?;

    set_session(cookies, context.config(), success.token);
    Ok(Json(LoginResponse {
        success: true,
        user: success.user,
        redirect_to: success.redirect_to,
    }))
}

/// Delete the session cookie and drop the cached session
#[post("/api/auth/logout")]
pub fn logout(context: &State<AppContext>, cookies: &CookieJar<'_>) -> Json<MessageResponse> {
    let Some(token) = clear_session(cookies, context.config()) else {
        return MessageResponse::ok(LOGOUT_NO_TOKEN_MESSAGE);
    };
    context.auth().logout(Some(&token));
    MessageResponse::ok(LOGOUT_MESSAGE)
}

#[post("/api/auth/register", format = "json", data = "<body>")]
pub async fn register(
    context: &State<AppContext>,
    body: Json<RegisterRequest>,
) -> ApiResult<(Status, Json<UserResponse>)> {
    let user = context.auth().register(body.into_inner()).await?;
    Ok((
        Status::Created,
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

#[post("/api/auth/forgot-password", format = "json", data = "<body>")]
pub async fn forgot_password(
    context: &State<AppContext>,
    body: Json<ForgotPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let message = context.auth().forgot_password(&body.email).await?;
    Ok(MessageResponse::ok(message))
}

/// Set a new password with a reset token from the body or the query string
#[post("/api/auth/reset-password?<token>", format = "json", data = "<body>")]
pub async fn reset_password(
    context: &State<AppContext>,
    token: Option<String>,
    body: Json<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let body = body.into_inner();
    let token = body
        .token
        .or(token)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Reset token is required"))?;
    let change = PasswordChange {
        password: body.password,
        confirm_password: body.confirm_password,
    };
    let message = context.auth().reset_password(&token, change).await?;
    Ok(MessageResponse::ok(message))
}

#[post("/api/auth/password", format = "json", data = "<body>")]
pub async fn update_password(
    context: &State<AppContext>,
    token: SessionToken,
    body: Json<PasswordChange>,
) -> ApiResult<Json<MessageResponse>> {
    let message = context
        .auth()
        .update_password(token.token(), body.into_inner())
        .await?;
    Ok(MessageResponse::ok(message))
}

#[get("/api/auth/session")]
pub fn session(user: OptionalUser) -> Json<SessionResponse> {
    Json(SessionResponse { user: user.0 })
}

pub fn routes() -> Vec<Route> {
    routes![
        login,
        logout,
        register,
        forgot_password,
        reset_password,
        update_password,
        session
    ]
}
