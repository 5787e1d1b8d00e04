//! Liveness probe

use bazaar_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{Route, State, get, routes};
use serde_json::{Value, json};

#[get("/health")]
pub fn health(context: &State<AppContext>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "environment": context.config().environment.to_string(),
    }))
}

pub fn routes() -> Vec<Route> {
    routes![health]
}
