//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use super::ServeSettings;

pub async fn cmd_serve(settings: ServeSettings, static_dir: Option<&Path>) -> Result<()> {
    println!("🚀 Starting Shakedown web server...");
    println!("   Listening: http://{}:{}", settings.host, settings.port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if settings.server.allowed_origins.is_empty() {
        println!("   🔒 CORS: same-origin only (SHAKEDOWN_ALLOWED_ORIGINS)");
    } else {
        println!(
            "   🌐 CORS: {} (SHAKEDOWN_ALLOWED_ORIGINS)",
            settings.server.allowed_origins.join(", ")
        );
    }
    println!("   📋 Max gear list: {} items", settings.server.max_items);
    println!();
    println!("   Press Ctrl+C to stop");

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    shakedown_server::serve_with_config(
        &settings.host,
        settings.port,
        static_dir_str,
        settings.server,
    )
    .await?;

    Ok(())
}
