//! Import command: fetch a Lighterpack list as a JSON gear list

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use shakedown_core::{LighterpackClient, RawGearItem};

/// Fetch a list and write it as a JSON gear list `analyze` can read back
pub async fn cmd_import(client: &LighterpackClient, url: &str, out: Option<&Path>) -> Result<()> {
    let items = client
        .fetch(url)
        .await
        .with_context(|| format!("Failed to import {}", url))?;
    let raw: Vec<RawGearItem> = items.iter().map(RawGearItem::from).collect();
    let json = serde_json::to_string_pretty(&raw)?;

    match out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Imported {} items to {}", raw.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
