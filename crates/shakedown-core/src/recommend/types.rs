//! Report types for the recommendation engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{AlternativeItem, Category, GearItem, Weight};

/// Pack classification by total weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    /// Under 10 lb
    Ultralight,
    /// Under 20 lb
    Lightweight,
    Traditional,
}

impl WeightClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Ultralight => "Ultralight",
            WeightClass::Lightweight => "Lightweight",
            WeightClass::Traditional => "Traditional",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeightClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ultralight" => Ok(WeightClass::Ultralight),
            "lightweight" => Ok(WeightClass::Lightweight),
            "traditional" => Ok(WeightClass::Traditional),
            _ => Err(format!("Unknown weight class: {}", s)),
        }
    }
}

/// Impact of a swap candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Savings of at least 12 oz
    High,
    /// Savings between 4 and 12 oz
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A surfaced replacement for one gear list item
///
/// Transient: built per run and turned into a [`Swap`] or an
/// [`Optimization`] depending on priority.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapCandidate<'a> {
    pub item: &'a GearItem,
    pub alternative: &'a AlternativeItem,
    pub savings_oz: f64,
    pub priority: Priority,
}

/// The item being replaced, as shown in a swap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentItemSnapshot {
    pub name: String,
    pub brand: Option<String>,
    /// Rounded to a whole ounce
    pub weight_oz: i64,
    /// Zero when the list carried no price
    pub price: f64,
}

impl From<&GearItem> for CurrentItemSnapshot {
    fn from(item: &GearItem) -> Self {
        Self {
            name: item.name.clone(),
            brand: item.brand.clone(),
            weight_oz: crate::models::round_oz(item.weight_oz),
            price: item.price.unwrap_or(0.0),
        }
    }
}

/// High-priority recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub current_item: CurrentItemSnapshot,
    pub recommended_item: AlternativeItem,
    pub savings_oz: i64,
    pub why: String,
}

/// Medium-priority recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub category: Category,
    /// Name of the item being replaced
    pub current_item: String,
    #[serde(rename = "weight_oz")]
    pub weight_oz: i64,
    pub savings_oz: i64,
    pub suggestion: String,
    pub alternatives: Vec<AlternativeItem>,
}

/// Positive feedback on choices that are already light
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
}

/// Discriminator carried in the `type` field of each recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Swap,
    Optimize,
    Positive,
}

/// Result of a full optimization pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub weight_class: WeightClass,
    pub current_weight: Weight,
    pub potential_weight: Weight,
    pub potential_savings: Weight,
    pub high_priority: Vec<Swap>,
    pub medium_priority: Vec<Optimization>,
    pub looking_good: Vec<Note>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_class_roundtrip() {
        for class in [
            WeightClass::Ultralight,
            WeightClass::Lightweight,
            WeightClass::Traditional,
        ] {
            assert_eq!(class.as_str().parse::<WeightClass>(), Ok(class));
        }
        assert!("heavy".parse::<WeightClass>().is_err());
    }

    #[test]
    fn test_snapshot_defaults_missing_price_to_zero() {
        let item = GearItem::new("Old Tent", Category::Shelter, 48.6).with_brand("REI");
        let snapshot = CurrentItemSnapshot::from(&item);
        assert_eq!(snapshot.weight_oz, 49);
        assert_eq!(snapshot.price, 0.0);
        assert_eq!(snapshot.brand.as_deref(), Some("REI"));
    }

    #[test]
    fn test_note_serializes_type_tag() {
        let note = Note {
            kind: RecommendationKind::Positive,
            message: "Nice".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "positive");
        assert_eq!(json["message"], "Nice");
    }
}
