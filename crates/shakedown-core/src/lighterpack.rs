//! Lighterpack list import
//!
//! Lighterpack publishes every shared list as a CSV export. We fetch that
//! export, convert each row to ounces, resolve categories with the
//! normalizer and fill in missing prices.

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::io::Read;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::categorize::normalize_category;
use crate::error::{Error, Result};
use crate::models::{GearItem, OZ_PER_LB};
use crate::pricing::estimate_for_list;

const LIGHTERPACK_HOST: &str = "lighterpack.com";
const DEFAULT_BASE_URL: &str = "https://lighterpack.com";

const GRAMS_PER_OZ: f64 = 28.349523125;

/// Item name prefixes that are a generic noun rather than a model name
const GENERIC_PREFIXES: &[&str] = &[
    "backpack", "tent", "sleeping", "pad", "liner", "jacket", "hammock", "filter", "bottle",
    "stove", "shelter",
];

fn list_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?lighterpack\.com/(?:r|csv)/([A-Za-z0-9_-]+)/?(?:[?#].*)?$")
            .expect("valid regex")
    })
}

fn dash_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Plain hyphens only split when spaced, so "Z-Lite" stays whole
    RE.get_or_init(|| Regex::new(r"\s*[—–]\s*|\s+-\s+").expect("valid regex"))
}

fn paren_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(([^)]+)\)\s*").expect("valid regex"))
}

/// Map a shared list URL to its CSV export URL
pub fn csv_export_url(list_url: &str) -> Result<String> {
    csv_export_url_with_base(list_url, DEFAULT_BASE_URL)
}

fn csv_export_url_with_base(list_url: &str, base_url: &str) -> Result<String> {
    let list_url = list_url.trim();
    if !list_url.contains(LIGHTERPACK_HOST) {
        return Err(Error::Import(
            "Please provide a valid Lighterpack URL".to_string(),
        ));
    }
    let id = list_url_regex()
        .captures(list_url)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| Error::Import(format!("Unrecognized Lighterpack list URL: {}", list_url)))?;
    Ok(format!("{}/csv/{}", base_url.trim_end_matches('/'), id.as_str()))
}

/// One row of the Lighterpack CSV export
#[derive(Debug, Deserialize)]
struct LighterpackRow {
    #[serde(rename = "Item Name", default)]
    name: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    qty: String,
    #[serde(default)]
    weight: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    price: String,
}

/// Convert a weight in the given unit to ounces
///
/// Unknown or empty units are read as ounces.
pub fn to_ounces(weight: f64, unit: &str) -> f64 {
    match unit.trim().to_lowercase().as_str() {
        "lb" | "lbs" => weight * OZ_PER_LB,
        "g" => weight / GRAMS_PER_OZ,
        "kg" => weight * 1000.0 / GRAMS_PER_OZ,
        _ => weight,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim()
        .replace(['$', ','], "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Split a brand out of an item name
///
/// Tries, in order: a dash separating exactly two parts ("Quilt - Enlightened
/// Equipment"), a parenthesized suffix ("Tent (Zpacks)"), then a generic
/// leading noun ("Backpack Gossamer Gear Mariposa").
pub fn split_brand(raw_name: &str) -> (String, Option<String>) {
    let raw_name = raw_name.trim();

    let parts: Vec<&str> = dash_regex().split(raw_name).collect();
    if parts.len() == 2 {
        return (parts[0].trim().to_string(), non_empty(parts[1]));
    }

    if let Some(caps) = paren_regex().captures(raw_name) {
        let brand = caps.get(1).and_then(|m| non_empty(m.as_str()));
        let name = paren_regex().replace(raw_name, " ").trim().to_string();
        return (name, brand);
    }

    let tokens: Vec<&str> = raw_name.split_whitespace().collect();
    if tokens.len() > 2 {
        let first = tokens[0].to_lowercase();
        let second = tokens[1].to_lowercase();
        if GENERIC_PREFIXES.contains(&first.as_str()) {
            let split_at = if first == "sleeping" && (second == "bag" || second == "pad") {
                2
            } else {
                1
            };
            return (
                tokens[..split_at].join(" "),
                Some(tokens[split_at..].join(" ")),
            );
        }
    }

    (raw_name.to_string(), None)
}

/// Parse a Lighterpack CSV export into a priced gear list
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<GearItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for result in rdr.deserialize::<LighterpackRow>() {
        let row = result?;

        let raw_name = row.name.trim();
        if raw_name.is_empty() {
            continue;
        }

        let qty = row
            .qty
            .trim()
            .parse::<u32>()
            .map(f64::from)
            .unwrap_or(1.0);
        let weight_oz = to_ounces(parse_number(&row.weight).unwrap_or(0.0), &row.unit) * qty;
        if weight_oz <= 0.0 {
            continue;
        }

        let (name, brand) = match non_empty(&row.desc) {
            Some(desc) => (raw_name.to_string(), Some(desc)),
            None => split_brand(raw_name),
        };
        let label = non_empty(&row.category).unwrap_or_else(|| "Miscellaneous".to_string());

        items.push(GearItem {
            category: normalize_category(Some(&label), &name),
            name,
            brand,
            weight_oz,
            price: parse_number(&row.price).filter(|p| *p > 0.0),
            price_estimated: None,
        });
    }

    if items.is_empty() {
        return Err(Error::Import(
            "No gear items found in the Lighterpack list".to_string(),
        ));
    }

    debug!("Parsed {} Lighterpack items", items.len());
    Ok(estimate_for_list(&items))
}

/// Downloads shared lists from Lighterpack
#[derive(Debug, Clone)]
pub struct LighterpackClient {
    http_client: Client,
    base_url: String,
}

impl Default for LighterpackClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LighterpackClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Fetch exports from a different host (mirrors, tests)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and parse a shared list
    pub async fn fetch(&self, list_url: &str) -> Result<Vec<GearItem>> {
        let export_url = csv_export_url_with_base(list_url, &self.base_url)?;
        info!("Fetching Lighterpack list {}", export_url);

        let response = self
            .http_client
            .get(&export_url)
            .send()
            .await?
            .error_for_status()?;
        // Redirects the client did not follow land here
        if !response.status().is_success() {
            return Err(Error::Import(format!(
                "Lighterpack answered {} for {}",
                response.status(),
                export_url
            )));
        }

        let body = response.bytes().await?;
        parse_csv(body.as_ref())
    }
}
