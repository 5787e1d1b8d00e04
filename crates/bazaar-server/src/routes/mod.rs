//! HTTP routes

pub mod admin_api;
pub mod auth_api;
pub mod health;
pub mod pages;

use rocket::Route;

/// Every route the server mounts at `/`
pub fn all() -> Vec<Route> {
    let mut routes = auth_api::routes();
    routes.extend(admin_api::routes());
    routes.extend(pages::routes());
    routes.extend(health::routes());
    routes.extend(rocket::routes![crate::guard::guard_redirect]);
    routes
}
