//! Session request guards
//!
//! Handlers ask for [`SessionToken`] when they need the raw cookie value and
//! for [`OptionalUser`] when they need the resolved account. Resolution runs
//! at most once per request.

use bazaar_domain::UserProfile;
use bazaar_infrastructure::AppContext;
use rocket::Request;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};

/// Raw session cookie value, `None` when absent or empty
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Resolved session user, `None` when unauthenticated
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<UserProfile>);

impl OptionalUser {
    pub fn user(&self) -> Option<&UserProfile> {
        self.0.as_ref()
    }
}

struct ResolvedSession(Option<UserProfile>);

fn app_context<'r>(request: &'r Request<'_>) -> Option<&'r AppContext> {
    request.rocket().state::<AppContext>()
}

fn read_token(request: &Request<'_>, context: &AppContext) -> Option<String> {
    request
        .cookies()
        .get(&context.config().auth.cookie.name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionToken {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match app_context(request) {
            Some(context) => Outcome::Success(Self(read_token(request, context))),
            None => Outcome::Error((Status::InternalServerError, ())),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(context) = app_context(request) else {
            return Outcome::Error((Status::InternalServerError, ()));
        };
        let token = read_token(request, context);
        let resolved = request
            .local_cache_async(async {
                ResolvedSession(context.resolver().resolve(token.as_deref()).await)
            })
            .await;
        Outcome::Success(Self(resolved.0.clone()))
    }
}
