//! Session cookie helpers

use bazaar_domain::constants::AUTH_COOKIE_MAX_AGE_SECS;
use bazaar_infrastructure::AppConfig;
use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::time::Duration;

/// Cookie carrying a freshly issued session token
///
/// `HttpOnly`, `SameSite=Lax`, `Path=/`, seven day max-age, `Secure` when the
/// configuration asks for it (production by default).
pub fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.auth.cookie.name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(AUTH_COOKIE_MAX_AGE_SECS))
        .secure(config.cookie_secure())
        .build()
}

/// Set the session cookie on the response
pub fn set_session(cookies: &CookieJar<'_>, config: &AppConfig, token: String) {
    cookies.add(session_cookie(config, token));
}

/// Remove the session cookie and return the value it carried
pub fn clear_session(cookies: &CookieJar<'_>, config: &AppConfig) -> Option<String> {
    let name = config.auth.cookie.name.clone();
    let token = cookies
        .get(&name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty());
    cookies.remove(Cookie::build(name).path("/"));
    token
}
