//! Administrator user management API
//!
//! Answers `{"data": ...}` on success. Missing session → 401, wrong role →
//! 403, both with the bare words the admin console expects.

use bazaar_domain::error::Error;
use bazaar_domain::{AuthError, UserId, UserProfile, UserUpdate};
use bazaar_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{Route, State, get, put, routes};
use serde::{Deserialize, Serialize};

use crate::response::ApiError;
use crate::session::OptionalUser;

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Id as sent by the console, a number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserIdParam {
    Number(UserId),
    Text(String),
}

impl UserIdParam {
    /// Positive id, or `None` for anything unusable
    pub fn parse(&self) -> Option<UserId> {
        let id = match self {
            Self::Number(id) => *id,
            Self::Text(text) => text.trim().parse().ok()?,
        };
        (id > 0).then_some(id)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<UserIdParam>,
    #[serde(flatten)]
    pub update: UserUpdate,
}

fn admin_error(err: Error) -> ApiError {
    match err {
        Error::Auth(AuthError::NotAuthenticated) => ApiError::unauthorized(),
        Error::Auth(AuthError::Forbidden) => ApiError::forbidden(),
        other => other.into(),
    }
}

/// All users, newest first (admin or super admin)
#[get("/api/admin/users")]
pub async fn list_users(
    context: &State<AppContext>,
    actor: OptionalUser,
) -> Result<Json<DataResponse<Vec<UserProfile>>>, ApiError> {
    let users = context
        .admin()
        .list_users(actor.user())
        .await
        .map_err(admin_error)?;
    Ok(Json(DataResponse { data: users }))
}

/// Change a user's role or active flag (super admin only)
#[put("/api/admin/users", format = "json", data = "<body>")]
pub async fn update_user(
    context: &State<AppContext>,
    actor: OptionalUser,
    body: Json<UpdateUserRequest>,
) -> Result<Json<DataResponse<UserProfile>>, ApiError> {
    let body = body.into_inner();
    let id = body.id.as_ref().and_then(UserIdParam::parse);
    let user = context
        .admin()
        .update_user(actor.user(), id, body.update)
        .await
        .map_err(admin_error)?;
    Ok(Json(DataResponse { data: user }))
}

pub fn routes() -> Vec<Route> {
    routes![list_users, update_user]
}
