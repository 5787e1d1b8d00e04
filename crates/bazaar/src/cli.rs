//! Command line interface

use std::path::PathBuf;

use clap::Parser;

/// Command line interface for the Bazaar server
#[derive(Parser, Debug)]
#[command(name = "bazaar")]
#[command(about = "Bazaar - marketplace authentication server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
