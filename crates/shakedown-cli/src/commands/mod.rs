//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Gear list loading and the shakedown report
//! - `config` - Server settings from file, environment and flags
//! - `estimate` - Single-item price estimate
//! - `import` - Lighterpack list import
//! - `serve` - Web server command
//! - `starter` - Starter lists from a trip profile

pub mod analyze;
pub mod config;
pub mod estimate;
pub mod import;
pub mod serve;
pub mod starter;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use estimate::*;
pub use import::*;
pub use serve::*;
pub use starter::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
