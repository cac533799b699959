//! Shakedown CLI - Backpacking gear list optimizer
//!
//! Usage:
//!   shakedown analyze gear.json          Suggest lighter swaps for a list
//!   shakedown estimate -n NAME -c CAT    Estimate an item's price
//!   shakedown starter --trip-type ...    Generate a starter list
//!   shakedown import URL                 Import a Lighterpack list
//!   shakedown serve --port 3000          Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Analyze { file, json } => commands::cmd_analyze(&file, json),
        Commands::Estimate {
            name,
            category,
            weight,
        } => commands::cmd_estimate(&name, &category, weight),
        Commands::Starter {
            trip_type,
            season,
            terrain,
            experience,
            budget,
            json,
        } => {
            let profile =
                commands::parse_profile(&trip_type, &season, &terrain, &experience, &budget)?;
            commands::cmd_starter(profile, json)
        }
        Commands::Import { url, out } => {
            let client = shakedown_core::LighterpackClient::new();
            commands::cmd_import(&client, &url, out.as_deref()).await
        }
        Commands::Serve {
            port,
            host,
            config,
            static_dir,
        } => {
            let file = match config {
                Some(path) => commands::load_config_file(&path)?,
                None => commands::FileConfig::default(),
            };
            let settings = commands::resolve_settings(
                file,
                commands::EnvOverrides::from_env(),
                host,
                port,
            )?;
            commands::cmd_serve(settings, static_dir.as_deref()).await
        }
    }
}
