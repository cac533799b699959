//! Server settings: TOML file, then environment, then flags

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use shakedown_server::{ServerConfig, DEFAULT_MAX_ITEMS};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Optional server config file
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origins: Option<Vec<String>>,
    pub max_items: Option<usize>,
}

/// Raw values of the SHAKEDOWN_* environment variables
#[derive(Debug, Default)]
pub struct EnvOverrides {
    /// Comma-separated origins
    pub allowed_origins: Option<String>,
    pub max_items: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            allowed_origins: std::env::var("SHAKEDOWN_ALLOWED_ORIGINS").ok(),
            max_items: std::env::var("SHAKEDOWN_MAX_ITEMS").ok(),
        }
    }
}

/// Everything `serve` needs
#[derive(Debug)]
pub struct ServeSettings {
    pub host: String,
    pub port: u16,
    pub server: ServerConfig,
}

pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config TOML in {}", path.display()))
}

/// Merge the three layers; flags win over env, env wins over file
pub fn resolve_settings(
    file: FileConfig,
    env: EnvOverrides,
    host: Option<String>,
    port: Option<u16>,
) -> Result<ServeSettings> {
    let allowed_origins = match env.allowed_origins {
        Some(origins) => parse_origins(&origins),
        None => file.allowed_origins.unwrap_or_default(),
    };

    let max_items = match env.max_items.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse()
            .with_context(|| format!("SHAKEDOWN_MAX_ITEMS must be a number, got '{}'", raw))?,
        _ => file.max_items.unwrap_or(DEFAULT_MAX_ITEMS),
    };

    Ok(ServeSettings {
        host: host
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: port.or(file.port).unwrap_or(DEFAULT_PORT),
        server: ServerConfig {
            allowed_origins,
            max_items,
        },
    })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
