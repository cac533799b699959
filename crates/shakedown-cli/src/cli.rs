//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shakedown - Find the ounces worth cutting from a gear list
#[derive(Parser)]
#[command(name = "shakedown")]
#[command(about = "Backpacking gear list optimizer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a gear list and suggest lighter swaps
    Analyze {
        /// Gear list file: JSON (array or {"gearList": [...]}) or Lighterpack CSV
        file: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the street price of a single item
    Estimate {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Category label (free-form, normalized before estimating)
        #[arg(short, long)]
        category: String,

        /// Item weight in ounces
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Generate a starter gear list for a trip profile
    Starter {
        /// Trip length: weekend, 1-week, 2+weeks
        #[arg(long)]
        trip_type: String,

        /// Season: spring, summer, fall, winter
        #[arg(long)]
        season: String,

        /// Terrain: easy, moderate, difficult
        #[arg(long)]
        terrain: String,

        /// Experience: beginner, intermediate, expert
        #[arg(long)]
        experience: String,

        /// Budget: budget, mid-range, premium
        #[arg(long, default_value = "mid-range")]
        budget: String,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import a public Lighterpack list
    Import {
        /// Lighterpack list URL (https://lighterpack.com/r/<id>)
        url: String,

        /// Write the gear list JSON here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on [default: 3000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// TOML config file (host, port, allowed_origins, max_items)
        ///
        /// Flags override environment variables, which override the file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
