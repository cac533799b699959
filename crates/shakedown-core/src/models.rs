//! Domain models for Shakedown

use serde::{Deserialize, Serialize};

/// Canonical gear category
///
/// The ten canonical classifications the engine reasons about, plus an
/// `Other` escape hatch carrying a label that could not be resolved.
/// Serialized as its display string ("Sleeping Bag", "First Aid", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Shelter,
    SleepingBag,
    SleepingPad,
    Backpack,
    Cooking,
    Water,
    Clothing,
    Electronics,
    FirstAid,
    Misc,
    /// Best-effort passthrough of an unrecognized label
    Other(String),
}

impl Category {
    /// All canonical categories
    pub const CANONICAL: [Category; 10] = [
        Category::Shelter,
        Category::SleepingBag,
        Category::SleepingPad,
        Category::Backpack,
        Category::Cooking,
        Category::Water,
        Category::Clothing,
        Category::Electronics,
        Category::FirstAid,
        Category::Misc,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Shelter => "Shelter",
            Self::SleepingBag => "Sleeping Bag",
            Self::SleepingPad => "Sleeping Pad",
            Self::Backpack => "Backpack",
            Self::Cooking => "Cooking",
            Self::Water => "Water",
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::FirstAid => "First Aid",
            Self::Misc => "Misc",
            Self::Other(label) => label,
        }
    }

    /// Strict lookup of a canonical category by its display name
    ///
    /// Case-insensitive and whitespace-tolerant. Returns `None` for anything
    /// outside the canonical set.
    pub fn canonical(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "shelter" => Some(Self::Shelter),
            "sleeping bag" => Some(Self::SleepingBag),
            "sleeping pad" => Some(Self::SleepingPad),
            "backpack" => Some(Self::Backpack),
            "cooking" => Some(Self::Cooking),
            "water" => Some(Self::Water),
            "clothing" => Some(Self::Clothing),
            "electronics" => Some(Self::Electronics),
            "first aid" => Some(Self::FirstAid),
            "misc" | "miscellaneous" => Some(Self::Misc),
            _ => None,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Shelter, sleeping bag, sleeping pad and backpack
    pub fn is_big_three(&self) -> bool {
        matches!(
            self,
            Self::Shelter | Self::SleepingBag | Self::SleepingPad | Self::Backpack
        )
    }

    /// Sleeping bags and pads share one price band and weight rule
    pub fn is_sleep_system(&self) -> bool {
        matches!(self, Self::SleepingBag | Self::SleepingPad)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::canonical(&label).unwrap_or(Self::Other(label))
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::canonical(label).unwrap_or_else(|| Self::Other(label.to_string()))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A gear list entry
///
/// `weight_oz` is already multiplied by quantity: one row per distinct item
/// type. Items are treated as values; normalization and price filling return
/// new items instead of mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub category: Category,
    pub weight_oz: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Set by price filling: true when the price was estimated
    #[serde(
        default,
        rename = "priceEstimated",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_estimated: Option<bool>,
}

impl GearItem {
    pub fn new(name: impl Into<String>, category: Category, weight_oz: f64) -> Self {
        Self {
            name: name.into(),
            brand: None,
            category,
            weight_oz,
            price: None,
            price_estimated: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Price if known and positive
    pub fn known_price(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0)
    }
}

/// A lighter replacement candidate from the alternatives catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlternativeItem {
    pub name: &'static str,
    pub weight_oz: f64,
    pub price: f64,
    pub description: &'static str,
    pub url: &'static str,
}

/// A weight expressed in whole ounces and in pounds (two decimals)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weight {
    pub oz: i64,
    pub lbs: f64,
}

impl Weight {
    pub fn new(oz: i64, lbs: f64) -> Self {
        Self {
            oz,
            lbs: round_to(lbs, 2),
        }
    }

    pub fn zero() -> Self {
        Self { oz: 0, lbs: 0.0 }
    }
}

/// Ounces per pound
pub const OZ_PER_LB: f64 = 16.0;

/// Round half away from zero to whole ounces
pub fn round_oz(oz: f64) -> i64 {
    oz.round() as i64
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_canonical_lookup() {
        assert_eq!(Category::canonical("Sleeping Bag"), Some(Category::SleepingBag));
        assert_eq!(Category::canonical("  first aid "), Some(Category::FirstAid));
        assert_eq!(Category::canonical("Miscellaneous"), Some(Category::Misc));
        assert_eq!(Category::canonical("Big Three"), None);
    }

    #[test]
    fn test_category_serde_roundtrip_uses_display_names() {
        let json = serde_json::to_string(&Category::SleepingPad).unwrap();
        assert_eq!(json, "\"Sleeping Pad\"");

        let parsed: Category = serde_json::from_str("\"Worn Items\"").unwrap();
        assert_eq!(parsed, Category::Other("Worn Items".to_string()));
        assert!(!parsed.is_canonical());
    }

    #[test]
    fn test_gear_item_deserializes_without_optional_fields() {
        let item: GearItem = serde_json::from_str(
            r#"{"name": "REI Flash 55", "category": "Backpack", "weight_oz": 38}"#,
        )
        .unwrap();

        assert_eq!(item.category, Category::Backpack);
        assert_eq!(item.brand, None);
        assert_eq!(item.price, None);
        assert_eq!(item.known_price(), None);
    }

    #[test]
    fn test_weight_rounds_pounds() {
        let weight = Weight::new(130, 130.0 / OZ_PER_LB);
        assert_eq!(weight.oz, 130);
        assert_eq!(weight.lbs, 8.13);
        assert_eq!(round_oz(20.5), 21);
    }
}
