//! Price estimation for backpacking gear
//!
//! Deterministic heuristics, no market data: a known-product table is
//! consulted first, otherwise a category baseline is adjusted for brand,
//! weight and marketing keywords, clamped to the category range and rounded
//! to the nearest $5.

use serde::Serialize;
use tracing::debug;

use crate::models::{Category, GearItem};

/// Price band for a category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub typical: f64,
}

/// Reference products with known street prices, checked in order
pub static KNOWN_GEAR_PRICES: &[(&str, f64)] = &[
    // Shelters
    ("zpacks duplex", 699.0),
    ("big agnes copper spur", 500.0),
    ("big agnes fly creek", 450.0),
    ("msr hubba", 450.0),
    ("nemo dagger", 450.0),
    ("rei quarter dome", 350.0),
    ("gossamer gear the one", 295.0),
    ("tarptent", 350.0),
    ("lanshan", 120.0),
    ("六道神器", 120.0),
    // Sleep system
    ("western mountaineering", 550.0),
    ("feathered friends", 500.0),
    ("enlightened equipment", 300.0),
    ("nemo disco", 350.0),
    ("sea to summit", 300.0),
    ("therm-a-rest neoair", 200.0),
    ("nemo tensor", 200.0),
    ("thermarest", 180.0),
    ("klymit", 70.0),
    ("z-lite", 50.0),
    // Backpacks
    ("zpacks arc", 375.0),
    ("hyperlite mountain gear", 365.0),
    ("gossamer gear mariposa", 325.0),
    ("ula circuit", 265.0),
    ("granite gear crown", 200.0),
    ("osprey exos", 250.0),
    ("osprey atmos", 280.0),
    ("gregory paragon", 250.0),
    // Cooking
    ("jetboil", 120.0),
    ("msr pocket rocket", 50.0),
    ("soto windmaster", 70.0),
    ("toaks titanium", 35.0),
    ("snow peak", 60.0),
    ("brs", 20.0),
    ("esbit", 15.0),
    // Water
    ("sawyer squeeze", 40.0),
    ("sawyer mini", 25.0),
    ("katadyn befree", 45.0),
    ("platypus", 35.0),
    ("cnoc", 35.0),
    ("smartwater", 3.0),
    // Clothing
    ("arc'teryx", 350.0),
    ("montbell plasma", 379.0),
    ("patagonia houdini", 99.0),
    ("outdoor research helium", 200.0),
    ("frogg toggs", 20.0),
    // Electronics
    ("garmin inreach", 350.0),
    ("spot", 150.0),
    ("nitecore nu25", 40.0),
    ("petzl", 45.0),
    ("anker", 35.0),
    ("nitecore nb10000", 50.0),
];

/// Brand multipliers applied to the category's typical price
pub static BRAND_MULTIPLIERS: &[(&str, f64)] = &[
    ("zpacks", 1.5),
    ("hyperlite", 1.4),
    ("arc'teryx", 1.6),
    ("western mountaineering", 1.5),
    ("feathered friends", 1.5),
    ("montbell", 1.3),
    ("patagonia", 1.2),
    ("enlightened equipment", 1.1),
    ("gossamer gear", 1.0),
    ("ula", 0.9),
    ("granite gear", 0.8),
    ("frogg toggs", 0.3),
    ("lanshan", 0.3),
    ("brs", 0.2),
    ("decathlon", 0.5),
];

const SHELTER_RANGE: PriceRange = PriceRange { min: 150.0, max: 700.0, typical: 350.0 };
const SLEEP_SYSTEM_RANGE: PriceRange = PriceRange { min: 100.0, max: 600.0, typical: 250.0 };
const BACKPACK_RANGE: PriceRange = PriceRange { min: 150.0, max: 400.0, typical: 280.0 };
const COOKING_RANGE: PriceRange = PriceRange { min: 20.0, max: 150.0, typical: 60.0 };
const WATER_RANGE: PriceRange = PriceRange { min: 10.0, max: 50.0, typical: 30.0 };
const CLOTHING_RANGE: PriceRange = PriceRange { min: 30.0, max: 400.0, typical: 120.0 };
const ELECTRONICS_RANGE: PriceRange = PriceRange { min: 25.0, max: 400.0, typical: 80.0 };
const FIRST_AID_RANGE: PriceRange = PriceRange { min: 15.0, max: 60.0, typical: 35.0 };
const MISC_RANGE: PriceRange = PriceRange { min: 5.0, max: 40.0, typical: 15.0 };

/// Multiplicative keyword adjustments: (keywords, multiplier, clothing only)
const KEYWORD_ADJUSTMENTS: &[(&[&str], f64, bool)] = &[
    (&["titanium", "ti "], 1.3, false),
    (&["carbon", "cuben"], 1.4, false),
    (&["down"], 1.3, true),
    (&["ultralight", "ul "], 1.15, false),
    (&["budget", "cheap", "basic"], 0.6, false),
];

/// Price band for a category; unrecognized categories use the Misc band
pub fn price_range(category: &Category) -> PriceRange {
    match category {
        Category::Shelter => SHELTER_RANGE,
        Category::SleepingBag | Category::SleepingPad => SLEEP_SYSTEM_RANGE,
        Category::Backpack => BACKPACK_RANGE,
        Category::Cooking => COOKING_RANGE,
        Category::Water => WATER_RANGE,
        Category::Clothing => CLOTHING_RANGE,
        Category::Electronics => ELECTRONICS_RANGE,
        Category::FirstAid => FIRST_AID_RANGE,
        Category::Misc | Category::Other(_) => MISC_RANGE,
    }
}

/// How an estimate was produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceBasis {
    /// Matched a reference product
    KnownItem { matched: &'static str },
    /// Category baseline with adjustments
    Heuristic,
}

/// A price estimate and the basis it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub price: f64,
    pub basis: PriceBasis,
}

/// Estimate a price in whole currency units
pub fn estimate_price(name: &str, category: &Category, weight_oz: Option<f64>) -> f64 {
    estimate_price_with_basis(name, category, weight_oz).price
}

/// Estimate a price and report which rule produced it
pub fn estimate_price_with_basis(
    name: &str,
    category: &Category,
    weight_oz: Option<f64>,
) -> PriceEstimate {
    let name_lower = name.to_lowercase();

    if let Some((matched, price)) = find_known_item(&name_lower) {
        return PriceEstimate {
            price,
            basis: PriceBasis::KnownItem { matched },
        };
    }

    let range = price_range(category);
    let mut price = range.typical;

    // Multiplier replaces the baseline rather than compounding with it
    if let Some((_, multiplier)) = BRAND_MULTIPLIERS
        .iter()
        .find(|(brand, _)| name_lower.contains(brand))
    {
        price = range.typical * multiplier;
    }

    if let Some(weight) = weight_oz {
        price *= weight_multiplier(category, weight);
    }

    for (keywords, multiplier, clothing_only) in KEYWORD_ADJUSTMENTS {
        if *clothing_only && *category != Category::Clothing {
            continue;
        }
        if keywords.iter().any(|k| name_lower.contains(k)) {
            price *= multiplier;
        }
    }

    let clamped = price.clamp(range.min, range.max);
    PriceEstimate {
        price: round_to_nearest_five(clamped),
        basis: PriceBasis::Heuristic,
    }
}

/// Bidirectional substring match against the known-product table
fn find_known_item(name_lower: &str) -> Option<(&'static str, f64)> {
    let needle = name_lower.trim();
    if needle.is_empty() {
        return None;
    }
    KNOWN_GEAR_PRICES
        .iter()
        .find(|(known, _)| needle.contains(known) || known.contains(needle))
        .copied()
}

/// Lighter shelters, packs and sleep gear are assumed pricier
fn weight_multiplier(category: &Category, weight_oz: f64) -> f64 {
    match category {
        Category::Shelter if weight_oz < 25.0 => 1.5,
        Category::Shelter if weight_oz < 40.0 => 1.2,
        Category::Backpack if weight_oz < 25.0 => 1.3,
        c if c.is_sleep_system() && weight_oz < 20.0 => 1.3,
        _ => 1.0,
    }
}

fn round_to_nearest_five(price: f64) -> f64 {
    (price / 5.0).round() * 5.0
}

/// Fill in missing prices on a gear list
///
/// Items with no price, or a zero price, get an estimate and are tagged
/// `price_estimated = Some(true)`. Items with a positive price pass through
/// with the tag set to `Some(false)`.
pub fn estimate_for_list(items: &[GearItem]) -> Vec<GearItem> {
    let filled: Vec<GearItem> = items
        .iter()
        .map(|item| match item.known_price() {
            Some(_) => GearItem {
                price_estimated: Some(false),
                ..item.clone()
            },
            None => GearItem {
                price: Some(estimate_price(
                    &item.name,
                    &item.category,
                    Some(item.weight_oz),
                )),
                price_estimated: Some(true),
                ..item.clone()
            },
        })
        .collect();

    debug!(
        "Estimated prices for {} of {} items",
        filled
            .iter()
            .filter(|item| item.price_estimated == Some(true))
            .count(),
        filled.len()
    );

    filled
}
