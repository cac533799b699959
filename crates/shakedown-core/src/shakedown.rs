//! Full shakedown: validate, normalize, price and recommend
//!
//! This is the entry point used by the server and the CLI. Unlike the
//! engine components it does reject input: a gear list that is empty or has
//! malformed items yields `Error::Validation` listing every problem found.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::categorize::normalize_category;
use crate::error::{Error, Result};
use crate::models::{round_oz, round_to, GearItem, OZ_PER_LB};
use crate::pricing::estimate_for_list;
use crate::recommend::{RecommendationEngine, RecommendationReport};

/// A gear list entry as submitted, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGearItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weight_oz: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Estimated prices are dropped so a later shakedown re-estimates them and
/// tags them as estimates instead of passing them off as submitted prices.
impl From<&GearItem> for RawGearItem {
    fn from(item: &GearItem) -> Self {
        Self {
            name: Some(item.name.clone()),
            brand: item.brand.clone(),
            category: Some(item.category.to_string()),
            weight_oz: Some(item.weight_oz),
            price: item.price.filter(|_| item.price_estimated != Some(true)),
        }
    }
}

/// Totals over the normalized list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearSummary {
    pub total_items: usize,
    pub total_weight_oz: i64,
    /// One decimal
    pub total_weight_lbs: f64,
    /// Two decimals; items without a price count as zero
    pub total_price: f64,
}

impl GearSummary {
    pub fn from_items(items: &[GearItem]) -> Self {
        let total_oz: f64 = items.iter().map(|item| item.weight_oz).sum();
        let total_price: f64 = items.iter().filter_map(|item| item.price).sum();
        Self {
            total_items: items.len(),
            total_weight_oz: round_oz(total_oz),
            total_weight_lbs: round_to(total_oz / OZ_PER_LB, 1),
            total_price: round_to(total_price, 2),
        }
    }
}

/// Result of a shakedown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShakedownReport {
    /// Normalized items with missing prices filled in
    pub items: Vec<GearItem>,
    pub summary: GearSummary,
    pub recommendations: RecommendationReport,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Check every item and collect all problems
///
/// Item numbers in messages are 1-based.
pub fn validate_gear_list(items: &[RawGearItem]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::Validation(vec![
            "Gear list cannot be empty".to_string(),
        ]));
    }

    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let n = index + 1;
        if is_blank(&item.name) {
            errors.push(format!("Item {}: name is required", n));
        }
        if is_blank(&item.category) {
            errors.push(format!("Item {}: category is required", n));
        }
        match item.weight_oz {
            None => errors.push(format!("Item {}: weight_oz is required", n)),
            Some(weight) if weight < 0.0 || !weight.is_finite() => {
                errors.push(format!("Item {}: weight_oz cannot be negative", n))
            }
            Some(_) => {}
        }
        if matches!(item.price, Some(price) if price < 0.0) {
            errors.push(format!("Item {}: price cannot be negative", n));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}

/// Convert validated raw items, resolving each category label
pub fn normalize_items(items: &[RawGearItem]) -> Vec<GearItem> {
    items
        .iter()
        .map(|raw| {
            let name = raw.name.clone().unwrap_or_default().trim().to_string();
            GearItem {
                category: normalize_category(raw.category.as_deref(), &name),
                name,
                brand: raw.brand.clone().filter(|b| !b.trim().is_empty()),
                weight_oz: raw.weight_oz.unwrap_or(0.0),
                price: raw.price,
                price_estimated: None,
            }
        })
        .collect()
}

/// Run a shakedown with the built-in catalog
pub fn shakedown(items: &[RawGearItem]) -> Result<ShakedownReport> {
    shakedown_with(&RecommendationEngine::new(), items)
}

/// Run a shakedown with a specific engine
pub fn shakedown_with<C: crate::catalog::AlternativeSource>(
    engine: &RecommendationEngine<C>,
    items: &[RawGearItem],
) -> Result<ShakedownReport> {
    validate_gear_list(items)?;

    let normalized = normalize_items(items);
    let priced = estimate_for_list(&normalized);
    let summary = GearSummary::from_items(&priced);
    let recommendations = engine.recommend(&priced);

    debug!(
        "Shakedown of {} items: {}oz, {} swaps",
        summary.total_items,
        summary.total_weight_oz,
        recommendations.high_priority.len()
    );

    Ok(ShakedownReport {
        items: priced,
        summary,
        recommendations,
    })
}
