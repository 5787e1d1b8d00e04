//! Server-rendered pages
//!
//! The guard fairing has already screened these paths by cookie and token
//! role; handlers here check the resolved account, which reflects role and
//! active-flag changes made after the token was issued.

use bazaar_application::mailer::templates::{BRAND, escape_html};
use bazaar_domain::constants::{HOME_PATH, LOGIN_PATH, REDIRECT_QUERY_PARAM};
use bazaar_domain::{Role, UserProfile};
use bazaar_infrastructure::AppContext;
use rocket::http::CookieJar;
use rocket::http::uri::Origin;
use rocket::response::Redirect;
use rocket::response::content::RawHtml;
use rocket::{Route, State, get, routes};

use crate::cookies::clear_session;
use crate::session::OptionalUser;

type PageResult = Result<RawHtml<String>, Redirect>;

fn layout(title: &str, body: &str) -> RawHtml<String> {
    RawHtml(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title} - {BRAND}</title></head>\
         <body><main>{body}</main></body></html>",
        title = escape_html(title),
    ))
}

fn login_redirect(uri: &Origin<'_>) -> Redirect {
    Redirect::to(format!(
        "{LOGIN_PATH}?{REDIRECT_QUERY_PARAM}={}",
        urlencoding::encode(uri.path().as_str())
    ))
}

fn greeting(user: &UserProfile) -> String {
    format!("<p>Signed in as {}</p>", escape_html(&user.email))
}

/// Page for a signed-in user whose role passes `allowed`
fn session_page(
    uri: &Origin<'_>,
    user: OptionalUser,
    allowed: fn(Role) -> bool,
    title: &str,
) -> PageResult {
    let Some(user) = user.0 else {
        return Err(login_redirect(uri));
    };
    if !allowed(user.role) {
        tracing::debug!(
            user_id = user.id,
            role = %user.role,
            path = uri.path().as_str(),
            "page refused for role"
        );
        return Err(Redirect::to(HOME_PATH));
    }
    Ok(layout(
        title,
        &format!("<h1>{}</h1>{}", escape_html(title), greeting(&user)),
    ))
}

fn any_role(_: Role) -> bool {
    true
}

#[get("/")]
pub fn index(session: OptionalUser) -> RawHtml<String> {
    let body = match session.user() {
        Some(user) => format!(
            "<h1>Welcome back, {}</h1>{}",
            escape_html(user.display_name()),
            greeting(user)
        ),
        None => format!("<h1>Welcome to {BRAND}</h1><p><a href=\"{LOGIN_PATH}\">Sign in</a></p>"),
    };
    layout("Home", &body)
}

#[get("/login?<redirect>")]
pub fn login(redirect: Option<String>) -> RawHtml<String> {
    let redirect = redirect.unwrap_or_else(|| HOME_PATH.to_string());
    layout(
        "Sign in",
        &format!(
            "<h1>Sign in</h1>\
             <form method=\"post\" action=\"/api/auth/login\" data-redirect=\"{}\">\
             <input name=\"email\" type=\"email\"><input name=\"password\" type=\"password\">\
             <button type=\"submit\">Sign in</button></form>",
            escape_html(&redirect)
        ),
    )
}

#[get("/register")]
pub fn register() -> RawHtml<String> {
    layout("Create account", "<h1>Create account</h1>")
}

#[get("/forgot-password")]
pub fn forgot_password() -> RawHtml<String> {
    layout("Forgot password", "<h1>Forgot password</h1>")
}

#[get("/reset-password?<token>")]
pub fn reset_password(token: Option<String>) -> RawHtml<String> {
    let body = match token {
        Some(token) => format!(
            "<h1>Choose a new password</h1><form data-token=\"{}\"></form>",
            escape_html(&token)
        ),
        None => "<h1>Reset link missing</h1>".to_string(),
    };
    layout("Reset password", &body)
}

#[get("/services")]
pub fn services() -> RawHtml<String> {
    layout("Services", "<h1>Services</h1>")
}

#[get("/about")]
pub fn about() -> RawHtml<String> {
    layout("About", &format!("<h1>About {BRAND}</h1>"))
}

#[get("/booking")]
pub fn booking(uri: &Origin<'_>, user: OptionalUser) -> PageResult {
    session_page(uri, user, any_role, "Booking")
}

#[get("/orders")]
pub fn orders(uri: &Origin<'_>, user: OptionalUser) -> PageResult {
    session_page(uri, user, any_role, "Orders")
}

#[get("/profile")]
pub fn profile(uri: &Origin<'_>, user: OptionalUser) -> PageResult {
    session_page(uri, user, any_role, "Profile")
}

#[get("/admin/<_..>")]
pub fn admin(uri: &Origin<'_>, user: OptionalUser) -> PageResult {
    session_page(uri, user, Role::is_admin, "Administration")
}

#[get("/provider/<_..>")]
pub fn provider(uri: &Origin<'_>, user: OptionalUser) -> PageResult {
    session_page(uri, user, Role::is_provider, "Provider dashboard")
}

/// Browser logout: drop the cookie, then send the user to the login page
#[get("/logout")]
pub fn logout(context: &State<AppContext>, cookies: &CookieJar<'_>) -> Redirect {
    if let Some(token) = clear_session(cookies, context.config()) {
        context.auth().logout(Some(&token));
    }
    Redirect::to(LOGIN_PATH)
}

pub fn routes() -> Vec<Route> {
    routes![
        index,
        login,
        register,
        forgot_password,
        reset_password,
        services,
        about,
        booking,
        orders,
        profile,
        admin,
        provider,
        logout
    ]
}
