//! Analyze command: load a gear list and print the shakedown report

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use shakedown_core::lighterpack::parse_csv;
use shakedown_core::{shakedown, Error, RawGearItem, ShakedownReport};

use super::truncate;

/// Accepted JSON layouts for a gear list file
#[derive(Deserialize)]
#[serde(untagged)]
enum GearListFile {
    List(Vec<RawGearItem>),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        gear_list: Vec<RawGearItem>,
    },
}

/// Load a gear list from a JSON file or a Lighterpack CSV export
pub fn load_gear_list(path: &Path) -> Result<Vec<RawGearItem>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let items = parse_csv(file)?;
        return Ok(items.iter().map(RawGearItem::from).collect());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: GearListFile = serde_json::from_str(&content).with_context(|| {
        format!(
            "{} is not a gear list (expected a JSON array or {{\"gearList\": [...]}})",
            path.display()
        )
    })?;

    Ok(match parsed {
        GearListFile::List(items) => items,
        GearListFile::Wrapped { gear_list } => gear_list,
    })
}

/// Run a shakedown over the list in `path`
pub fn analyze_file(path: &Path) -> Result<ShakedownReport> {
    let items = load_gear_list(path)?;
    info!("Loaded {} items from {}", items.len(), path.display());

    match shakedown(&items) {
        Ok(report) => Ok(report),
        Err(Error::Validation(errors)) => {
            for error in &errors {
                eprintln!("   ✗ {}", error);
            }
            bail!("Gear list has {} problem(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn cmd_analyze(path: &Path, json: bool) -> Result<()> {
    let report = analyze_file(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ShakedownReport) {
    let summary = &report.summary;
    let recs = &report.recommendations;

    println!();
    println!("🎒 Gear Shakedown");
    println!(
        "   {} items │ {} oz ({} lbs) │ ${:.2}",
        summary.total_items, summary.total_weight_oz, summary.total_weight_lbs, summary.total_price
    );
    println!("   Weight class: {}", recs.weight_class);
    println!(
        "   Potential: {} lbs (save {} oz)",
        recs.potential_weight.lbs, recs.potential_savings.oz
    );

    println!();
    println!("🔥 High priority swaps");
    println!("   ─────────────────────────────────────────────────────────────");
    if recs.high_priority.is_empty() {
        println!("   None - your big-ticket items are already light.");
    }
    for swap in &recs.high_priority {
        println!(
            "   {:30} {:>4} oz → {} ({} oz, ${:.0})  -{} oz",
            truncate(&swap.current_item.name, 30),
            swap.current_item.weight_oz,
            swap.recommended_item.name,
            swap.recommended_item.weight_oz,
            swap.recommended_item.price,
            swap.savings_oz
        );
        println!("      {}", swap.why);
    }

    if !recs.medium_priority.is_empty() {
        println!();
        println!("🔧 Worth a look");
        println!("   ─────────────────────────────────────────────────────────────");
        for opt in &recs.medium_priority {
            println!(
                "   [{}] {} ({} oz): {}",
                opt.category,
                truncate(&opt.current_item, 30),
                opt.weight_oz,
                opt.suggestion
            );
        }
    }

    for note in &recs.looking_good {
        println!();
        println!("✅ {}", note.message);
    }
    println!();
}
