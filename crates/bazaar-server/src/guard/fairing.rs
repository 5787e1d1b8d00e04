//! Request fairing that applies the guard policy
//!
//! A request the policy turns away is rewritten to `GET /__guard/redirect`,
//! with the destination stashed in the request-local cache; that route
//! answers with a redirect.

use bazaar_domain::constants::HOME_PATH;
use bazaar_infrastructure::AppContext;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Method;
use rocket::http::uri::Origin;
use rocket::request::{FromRequest, Outcome};
use rocket::response::Redirect;
use rocket::{Data, Request, get};

use super::policy::{GuardDecision, evaluate};
use crate::constants::GUARD_REDIRECT_ROUTE;

/// Redirect destination chosen by the guard for the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardTarget(pub Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for GuardTarget {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(request.local_cache(GuardTarget::default).clone())
    }
}

/// Target of rewritten requests
#[get("/__guard/redirect")]
pub fn guard_redirect(target: GuardTarget) -> Redirect {
    Redirect::to(target.0.unwrap_or_else(|| HOME_PATH.to_string()))
}

/// Fairing running [`evaluate`] on every incoming request
pub struct RouteGuard;

fn decoded_path(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |path| path.into_owned())
}

#[rocket::async_trait]
impl Fairing for RouteGuard {
    fn info(&self) -> Info {
        Info {
            name: "Route Guard",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        let Some(context) = request.rocket().state::<AppContext>() else {
            tracing::error!("route guard running without application context");
            return;
        };

        let path = decoded_path(request.uri().path().as_str());
        let token = request
            .cookies()
            .get(&context.config().auth.cookie.name)
            .map(|cookie| cookie.value().to_string());
        let tokens = context.tokens();

        let GuardDecision::Redirect(target) = evaluate(&path, token.as_deref(), tokens.as_ref())
        else {
            return;
        };

        match Origin::parse(GUARD_REDIRECT_ROUTE) {
            Ok(uri) => {
                tracing::debug!(path = %path, target = %target, "route guard redirect");
                request.local_cache(|| GuardTarget(Some(target)));
                request.set_method(Method::Get);
                request.set_uri(uri);
            }
            Err(e) => tracing::error!(error = %e, "invalid guard redirect route"),
        }
    }
}
