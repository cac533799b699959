//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod health;
pub mod lighterpack;
pub mod pricing;
pub mod recommendations;
pub mod shakedown;

// Re-export all handlers for use in router
pub use health::*;
pub use lighterpack::*;
pub use pricing::*;
pub use recommendations::*;
pub use shakedown::*;

use crate::AppError;

/// Reject lists longer than the configured cap
pub(crate) fn check_list_size(len: usize, max_items: usize) -> Result<(), AppError> {
    if len > max_items {
        return Err(AppError::bad_request(&format!(
            "Gear list has {} items; the limit is {}",
            len, max_items
        )));
    }
    Ok(())
}
