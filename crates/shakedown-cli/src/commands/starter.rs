//! Starter command: generate a gear list from a trip profile

use anyhow::{anyhow, Result};

use shakedown_core::{starter_list, TripProfile};

/// Parse the five profile fields, naming the first one that is invalid
pub fn parse_profile(
    trip_type: &str,
    season: &str,
    terrain: &str,
    experience: &str,
    budget: &str,
) -> Result<TripProfile> {
    Ok(TripProfile {
        trip_type: trip_type.parse().map_err(|e: String| anyhow!(e))?,
        season: season.parse().map_err(|e: String| anyhow!(e))?,
        terrain: terrain.parse().map_err(|e: String| anyhow!(e))?,
        experience: experience.parse().map_err(|e: String| anyhow!(e))?,
        budget: budget.parse().map_err(|e: String| anyhow!(e))?,
    })
}

pub fn cmd_starter(profile: TripProfile, json: bool) -> Result<()> {
    let list = starter_list(profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!();
    println!(
        "🏕️  Starter list: {} / {} / {} terrain / {} / {}",
        profile.trip_type, profile.season, profile.terrain, profile.experience, profile.budget
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:34} │ {:12} │ {:>6} │ {:>7}", "Item", "Category", "Oz", "Price");
    println!("   ───────────────────────────────────┼──────────────┼────────┼────────");
    for item in &list.gear_list {
        println!(
            "   {:34} │ {:12} │ {:>6.1} │ {:>7}",
            super::truncate(&item.name, 34),
            item.category.as_str(),
            item.weight_oz,
            item.price.map(|p| format!("${:.0}", p)).unwrap_or_default()
        );
    }
    println!();
    println!(
        "   Total: {} items, {} lbs, ${:.2}",
        list.summary.total_items, list.summary.total_weight_lbs, list.summary.total_price
    );
    println!();

    Ok(())
}
