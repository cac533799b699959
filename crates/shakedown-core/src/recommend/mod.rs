//! Recommendation Engine - lighter gear suggestions
//!
//! Given a normalized gear list, finds the lightest catalog alternative for
//! each item, keeps the ones worth reporting and ranks them by savings.
//!
//! ## Buckets
//!
//! - **High priority** (`Swap`) - saves at least 12 oz, with a rationale
//! - **Medium priority** (`Optimization`) - saves 4 to 12 oz, one-line suggestion
//! - **Looking good** (`Note`) - at most one combined positive note
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shakedown_core::recommend::RecommendationEngine;
//!
//! let engine = RecommendationEngine::new();
//! let report = engine.recommend(&gear_list);
//! ```

pub mod engine;
pub mod rationale;
pub mod types;

pub use engine::{recommend, weight_class, RecommendationEngine};
pub use rationale::why_text;
pub use types::{
    CurrentItemSnapshot, Note, Optimization, Priority, RecommendationKind, RecommendationReport,
    Swap, SwapCandidate, WeightClass,
};

/// Savings below this are too small to report
pub const MIN_SWAP_SAVINGS_OZ: f64 = 4.0;

/// Savings at or above this make a candidate high priority
pub const HIGH_PRIORITY_SAVINGS_OZ: f64 = 12.0;

pub const ULTRALIGHT_MAX_LBS: f64 = 10.0;
pub const LIGHTWEIGHT_MAX_LBS: f64 = 20.0;

/// Lists under this total get the encouragement note
pub const LOOKING_GOOD_MAX_LBS: f64 = 15.0;

/// Big-three items under this are called out as already optimized
pub const LIGHT_BIG_THREE_MAX_OZ: f64 = 20.0;
