//! Shakedown Core Library
//!
//! The gear optimization engine behind Shakedown:
//! - Category normalization for messy, imported gear lists
//! - Deterministic price estimation heuristics
//! - A built-in catalog of lighter alternatives
//! - Swap selection, prioritization and weight aggregation
//! - Full shakedown assembly (validation + summary + recommendations)
//! - Starter lists generated from a trip profile
//! - Lighterpack list import

pub mod catalog;
pub mod categorize;
pub mod error;
pub mod lighterpack;
pub mod models;
pub mod pricing;
pub mod recommend;
pub mod shakedown;
pub mod starter;

/// Test utilities including a mock Lighterpack server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{alternatives_for, AlternativeSource, BuiltinCatalog};
pub use categorize::normalize_category;
pub use error::{Error, Result};
pub use lighterpack::LighterpackClient;
pub use models::{AlternativeItem, Category, GearItem, Weight};
pub use pricing::{
    estimate_for_list, estimate_price, estimate_price_with_basis, PriceBasis, PriceEstimate,
};
pub use recommend::{
    recommend, Optimization, Note, Priority, RecommendationEngine, RecommendationReport, Swap,
    WeightClass,
};
pub use shakedown::{shakedown, GearSummary, RawGearItem, ShakedownReport};
pub use starter::{
    starter_list, BudgetTier, Experience, Season, StarterList, Terrain, TripProfile, TripType,
};
