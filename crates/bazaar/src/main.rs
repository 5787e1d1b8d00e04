//! Bazaar - Entry Point
//!
//! Lives in the `bazaar` facade crate next to the library of the same name.

use bazaar::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
