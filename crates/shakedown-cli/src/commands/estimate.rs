//! Estimate command: price a single item

use anyhow::{bail, Result};

use shakedown_core::{estimate_price_with_basis, normalize_category, PriceBasis, PriceEstimate};

/// Normalize the category label and estimate the price
pub fn estimate_item(name: &str, category: &str, weight_oz: Option<f64>) -> Result<PriceEstimate> {
    if name.trim().is_empty() || category.trim().is_empty() {
        bail!("Item name and category are required");
    }
    if weight_oz.is_some_and(|w| w < 0.0) {
        bail!("Weight cannot be negative");
    }

    let category = normalize_category(Some(category), name);
    Ok(estimate_price_with_basis(name, &category, weight_oz))
}

pub fn cmd_estimate(name: &str, category: &str, weight_oz: Option<f64>) -> Result<()> {
    let estimate = estimate_item(name, category, weight_oz)?;
    let normalized = normalize_category(Some(category), name);

    println!();
    println!("💲 {} ({})", name, normalized);
    println!("   Estimated price: ${:.0}", estimate.price);
    match &estimate.basis {
        PriceBasis::KnownItem { matched } => println!("   Based on known item: {}", matched),
        PriceBasis::Heuristic => println!("   Based on category, brand and weight heuristics"),
    }
    println!("   Price is an estimate based on typical market values");
    println!();

    Ok(())
}
