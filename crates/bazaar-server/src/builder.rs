//! Rocket assembly

use bazaar_infrastructure::AppContext;
use rocket::{Build, Rocket, catchers};

use crate::guard::RouteGuard;
use crate::response::default_catcher;
use crate::routes;

/// Rocket instance serving `context`
///
/// Uses Rocket's default figment; [`crate::init::run`] layers the configured
/// address and port on top.
pub fn build_rocket(context: AppContext) -> Rocket<Build> {
    rocket::build()
        .manage(context)
        .attach(RouteGuard)
        .mount("/", routes::all())
        .register("/", catchers![default_catcher])
}
