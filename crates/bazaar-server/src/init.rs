//! Server initialization
//!
//! Loads configuration, installs logging, builds the application context and
//! launches Rocket on the configured address.

use std::path::Path;

use bazaar_infrastructure::config::{AppConfig, ConfigLoader};
use bazaar_infrastructure::init_app;
use bazaar_infrastructure::logging::init_logging;
use tracing::info;

use crate::builder::build_rocket;

/// Run the Bazaar server until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = config.server.port,
        "Starting Bazaar server"
    );

    let host = config.server.host.clone();
    let port = config.server.port;
    let context = init_app(config).await?;

    let figment = rocket::Config::figment()
        .merge(("address", host))
        .merge(("port", port));
    build_rocket(context).configure(figment).launch().await?;

    info!("Bazaar server stopped");
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
