//! Swap selection, prioritization and report aggregation

use tracing::debug;

use super::rationale::why_text;
use super::types::{
    CurrentItemSnapshot, Note, Optimization, Priority, RecommendationKind, RecommendationReport,
    Swap, SwapCandidate, WeightClass,
};
use super::{
    HIGH_PRIORITY_SAVINGS_OZ, LIGHTWEIGHT_MAX_LBS, LIGHT_BIG_THREE_MAX_OZ, LOOKING_GOOD_MAX_LBS,
    MIN_SWAP_SAVINGS_OZ, ULTRALIGHT_MAX_LBS,
};
use crate::catalog::{AlternativeSource, BuiltinCatalog};
use crate::models::{round_oz, AlternativeItem, Category, GearItem, Weight, OZ_PER_LB};

const RESEARCH_NOTE: &str = "Your gear choices show you've done research. \
    Main opportunities are in the \"Big Three\" (shelter, sleep, pack).";

/// Produces recommendation reports from a gear list
///
/// Stateless apart from the catalog it reads; one engine can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine<C = BuiltinCatalog> {
    catalog: C,
}

impl RecommendationEngine<BuiltinCatalog> {
    pub fn new() -> Self {
        Self {
            catalog: BuiltinCatalog,
        }
    }
}

impl<C: AlternativeSource> RecommendationEngine<C> {
    /// Engine reading alternatives from a custom source
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// Lightest strictly-lighter alternative for an item
    ///
    /// Among equally light alternatives the first in catalog order wins.
    pub fn best_alternative(&self, item: &GearItem) -> Option<&AlternativeItem> {
        self.catalog
            .alternatives_for(&item.category)
            .iter()
            .filter(|alternative| alternative.weight_oz < item.weight_oz)
            .min_by(|a, b| a.weight_oz.total_cmp(&b.weight_oz))
    }

    /// Surfaced candidates, sorted by savings (largest first)
    ///
    /// Candidates saving less than the reporting threshold are dropped. The
    /// sort is stable, so equal savings keep gear list order.
    pub fn swap_candidates<'a>(&'a self, items: &'a [GearItem]) -> Vec<SwapCandidate<'a>> {
        let mut candidates: Vec<SwapCandidate<'a>> = items
            .iter()
            .filter_map(|item| {
                let alternative = self.best_alternative(item)?;
                let savings_oz = item.weight_oz - alternative.weight_oz;
                if savings_oz < MIN_SWAP_SAVINGS_OZ {
                    return None;
                }
                let priority = if savings_oz >= HIGH_PRIORITY_SAVINGS_OZ {
                    Priority::High
                } else {
                    Priority::Medium
                };
                debug!(
                    "{} -> {}: {:.1}oz ({})",
                    item.name, alternative.name, savings_oz, priority
                );
                Some(SwapCandidate {
                    item,
                    alternative,
                    savings_oz,
                    priority,
                })
            })
            .collect();

        candidates.sort_by(|a, b| b.savings_oz.total_cmp(&a.savings_oz));
        candidates
    }

    /// Run a full optimization pass over a normalized gear list
    pub fn recommend(&self, items: &[GearItem]) -> RecommendationReport {
        let total_oz: f64 = items.iter().map(|item| item.weight_oz).sum();
        let candidates = self.swap_candidates(items);
        let savings_oz: f64 = candidates.iter().map(|c| c.savings_oz).sum();

        let mut high_priority = Vec::new();
        let mut medium_priority = Vec::new();
        for candidate in &candidates {
            match candidate.priority {
                Priority::High => high_priority.push(swap(candidate)),
                Priority::Medium => medium_priority.push(optimization(candidate)),
            }
        }

        let current_weight = Weight::new(round_oz(total_oz), total_oz / OZ_PER_LB);
        let potential_savings = Weight::new(round_oz(savings_oz), savings_oz / OZ_PER_LB);
        let potential_oz = current_weight.oz - potential_savings.oz;
        let potential_weight = Weight::new(potential_oz, potential_oz as f64 / OZ_PER_LB);

        debug!(
            "Recommended {} swaps and {} optimizations for {} items ({}oz)",
            high_priority.len(),
            medium_priority.len(),
            items.len(),
            current_weight.oz
        );

        RecommendationReport {
            weight_class: weight_class(total_oz),
            current_weight,
            potential_weight,
            potential_savings,
            high_priority,
            medium_priority,
            looking_good: looking_good(items, total_oz).into_iter().collect(),
        }
    }
}

/// Recommend using the built-in catalog
pub fn recommend(items: &[GearItem]) -> RecommendationReport {
    RecommendationEngine::new().recommend(items)
}

/// Classify a pack by total weight in ounces
pub fn weight_class(total_oz: f64) -> WeightClass {
    let total_lbs = total_oz / OZ_PER_LB;
    if total_lbs < ULTRALIGHT_MAX_LBS {
        WeightClass::Ultralight
    } else if total_lbs < LIGHTWEIGHT_MAX_LBS {
        WeightClass::Lightweight
    } else {
        WeightClass::Traditional
    }
}

fn swap(candidate: &SwapCandidate<'_>) -> Swap {
    Swap {
        kind: RecommendationKind::Swap,
        current_item: CurrentItemSnapshot::from(candidate.item),
        recommended_item: *candidate.alternative,
        savings_oz: round_oz(candidate.savings_oz),
        why: why_text(candidate.item, candidate.alternative, candidate.savings_oz),
    }
}

fn optimization(candidate: &SwapCandidate<'_>) -> Optimization {
    let alternative = candidate.alternative;
    let savings_oz = round_oz(candidate.savings_oz);
    Optimization {
        kind: RecommendationKind::Optimize,
        category: candidate.item.category.clone(),
        current_item: candidate.item.name.clone(),
        weight_oz: round_oz(candidate.item.weight_oz),
        savings_oz,
        suggestion: format!(
            "Consider {} ({}oz, ${}) to save {}oz.",
            alternative.name, alternative.weight_oz, alternative.price, savings_oz
        ),
        alternatives: vec![*alternative],
    }
}

/// At most one combined positive note
fn looking_good(items: &[GearItem], total_oz: f64) -> Option<Note> {
    let mut sentences = Vec::new();

    // An empty list has nothing to praise
    if !items.is_empty() && total_oz / OZ_PER_LB < LOOKING_GOOD_MAX_LBS {
        sentences.push(RESEARCH_NOTE.to_string());
    }

    // One entry per light item, in list order
    let light: Vec<&Category> = items
        .iter()
        .filter(|item| item.category.is_big_three() && item.weight_oz < LIGHT_BIG_THREE_MAX_OZ)
        .map(|item| &item.category)
        .collect();
    if !light.is_empty() {
        let names: Vec<&str> = light.iter().map(|c| c.as_str()).collect();
        sentences.push(format!("Your {} is already optimized.", names.join(", ")));
    }

    if sentences.is_empty() {
        None
    } else {
        Some(Note {
            kind: RecommendationKind::Positive,
            message: sentences.join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves the same alternatives for every category
    struct FixedCatalog(Vec<AlternativeItem>);

    impl AlternativeSource for FixedCatalog {
        fn alternatives_for(&self, _category: &Category) -> &[AlternativeItem] {
            &self.0
        }
    }

    fn alt(name: &'static str, weight_oz: f64) -> AlternativeItem {
        AlternativeItem {
            name,
            weight_oz,
            price: 50.0,
            description: "test",
            url: "https://example.com",
        }
    }

    #[test]
    fn test_backpack_swap_uses_lightest_alternative() {
        let items = vec![GearItem::new("REI Flash 55", Category::Backpack, 38.0)];
        let report = recommend(&items);

        assert_eq!(report.high_priority.len(), 1);
        let swap = &report.high_priority[0];
        let lightest = crate::catalog::alternatives_for(&Category::Backpack)
            .iter()
            .map(|a| a.weight_oz)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(swap.recommended_item.weight_oz, lightest);
        assert_eq!(swap.savings_oz, round_oz(38.0 - lightest));
        assert!(swap.savings_oz >= 12);
        assert_eq!(swap.current_item.name, "REI Flash 55");
        assert!(swap.why.contains(swap.recommended_item.name));
    }

    #[test]
    fn test_small_savings_are_not_surfaced() {
        let items = vec![GearItem::new("Generic Headlamp", Category::Electronics, 2.0)];
        let report = recommend(&items);

        assert!(report.high_priority.is_empty());
        assert!(report.medium_priority.is_empty());
        assert_eq!(report.potential_savings, Weight::zero());
        assert_eq!(report.potential_weight.oz, 2);
    }

    #[test]
    fn test_weight_class_thresholds() {
        assert_eq!(weight_class(128.0), WeightClass::Ultralight);
        assert_eq!(weight_class(159.9), WeightClass::Ultralight);
        assert_eq!(weight_class(160.0), WeightClass::Lightweight);
        assert_eq!(weight_class(319.0), WeightClass::Lightweight);
        assert_eq!(weight_class(320.0), WeightClass::Traditional);
    }

    #[test]
    fn test_total_weight_of_128oz() {
        let items = vec![
            GearItem::new("Food", Category::Other("consumables".to_string()), 100.0),
            GearItem::new("Stuff", Category::Other("consumables".to_string()), 28.0),
        ];
        let report = recommend(&items);
        assert_eq!(report.current_weight.oz, 128);
        assert_eq!(report.current_weight.lbs, 8.0);
        assert_eq!(report.weight_class, WeightClass::Ultralight);
    }

    #[test]
    fn test_empty_list_yields_empty_report() {
        let report = recommend(&[]);
        assert_eq!(report.current_weight, Weight::zero());
        assert_eq!(report.potential_weight, Weight::zero());
        assert_eq!(report.potential_savings, Weight::zero());
        assert!(report.high_priority.is_empty());
        assert!(report.medium_priority.is_empty());
        assert!(report.looking_good.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "weightClass",
            "currentWeight",
            "potentialWeight",
            "potentialSavings",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["highPriority"], serde_json::json!([]));
        assert_eq!(json["mediumPriority"], serde_json::json!([]));
        assert_eq!(json["lookingGood"], serde_json::json!([]));
    }

    #[test]
    fn test_medium_priority_suggestion_text() {
        let items = vec![GearItem::new("Nalgene bottle", Category::Water, 10.0)];
        let report = recommend(&items);

        assert!(report.high_priority.is_empty());
        assert_eq!(report.medium_priority.len(), 1);
        let optimization = &report.medium_priority[0];
        assert_eq!(optimization.current_item, "Nalgene bottle");
        assert_eq!(optimization.category, Category::Water);
        assert_eq!(
            optimization.suggestion,
            "Consider Smartwater bottles (2x) (1.5oz, $5) to save 9oz."
        );
        assert_eq!(optimization.alternatives.len(), 1);
    }

    #[test]
    fn test_priority_partition_at_boundaries() {
        let engine = RecommendationEngine::with_catalog(FixedCatalog(vec![alt("Feather", 1.0)]));
        let items = vec![
            GearItem::new("just under", Category::Misc, 4.9),
            GearItem::new("exactly four", Category::Misc, 5.0),
            GearItem::new("just under twelve", Category::Misc, 12.9),
            GearItem::new("exactly twelve", Category::Misc, 13.0),
        ];
        let candidates = engine.swap_candidates(&items);

        let by_name = |name: &str| candidates.iter().find(|c| c.item.name == name);
        assert!(by_name("just under").is_none());
        assert_eq!(by_name("exactly four").unwrap().priority, Priority::Medium);
        assert_eq!(
            by_name("just under twelve").unwrap().priority,
            Priority::Medium
        );
        assert_eq!(by_name("exactly twelve").unwrap().priority, Priority::High);
        for candidate in &candidates {
            assert!(candidate.savings_oz >= MIN_SWAP_SAVINGS_OZ);
            assert_eq!(
                candidate.savings_oz >= HIGH_PRIORITY_SAVINGS_OZ,
                candidate.priority == Priority::High
            );
        }
    }

    #[test]
    fn test_tie_breaks_on_catalog_order() {
        let engine = RecommendationEngine::with_catalog(FixedCatalog(vec![
            alt("Heavy", 9.0),
            alt("First Light", 2.0),
            alt("Second Light", 2.0),
        ]));
        let item = GearItem::new("Brick", Category::Misc, 20.0);
        assert_eq!(engine.best_alternative(&item).unwrap().name, "First Light");
    }

    #[test]
    fn test_only_strictly_lighter_alternatives() {
        let engine = RecommendationEngine::with_catalog(FixedCatalog(vec![alt("Same", 10.0)]));
        let item = GearItem::new("Ten", Category::Misc, 10.0);
        assert!(engine.best_alternative(&item).is_none());
    }

    #[test]
    fn test_candidates_sorted_with_stable_ties() {
        let engine = RecommendationEngine::with_catalog(FixedCatalog(vec![alt("Feather", 1.0)]));
        let items = vec![
            GearItem::new("a", Category::Misc, 9.0),
            GearItem::new("b", Category::Misc, 30.0),
            GearItem::new("c", Category::Misc, 9.0),
            GearItem::new("d", Category::Misc, 20.0),
        ];
        let names: Vec<&str> = engine
            .swap_candidates(&items)
            .iter()
            .map(|c| c.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);

        let report = engine.recommend(&items);
        let high: Vec<i64> = report.high_priority.iter().map(|s| s.savings_oz).collect();
        let medium: Vec<i64> = report.medium_priority.iter().map(|o| o.savings_oz).collect();
        assert_eq!(high, vec![29, 19]);
        assert_eq!(medium, vec![8, 8]);
    }

    #[test]
    fn test_savings_conservation() {
        let items = vec![
            GearItem::new("Tent", Category::Shelter, 48.3),
            GearItem::new("Bag", Category::SleepingBag, 33.7),
            GearItem::new("Pot", Category::Cooking, 9.6),
            GearItem::new("Jacket", Category::Clothing, 21.2),
        ];
        let report = recommend(&items);
        assert_eq!(
            report.potential_weight.oz + report.potential_savings.oz,
            report.current_weight.oz
        );
        let surfaced: i64 = report.high_priority.len() as i64 + report.medium_priority.len() as i64;
        assert_eq!(surfaced, 4);
    }

    #[test]
    fn test_looking_good_is_a_single_combined_note() {
        let items = vec![
            GearItem::new("Zpacks Duplex", Category::Shelter, 19.0),
            GearItem::new("Arc Blast", Category::Backpack, 17.0),
            GearItem::new("Other Tent", Category::Shelter, 18.0),
        ];
        let report = recommend(&items);

        assert_eq!(report.looking_good.len(), 1);
        assert_eq!(
            report.looking_good[0].message,
            format!(
                "{} Your Shelter, Backpack, Shelter is already optimized.",
                RESEARCH_NOTE
            )
        );
    }

    #[test]
    fn test_light_items_listed_per_item() {
        let items = vec![
            GearItem::new("Duplex", Category::Shelter, 19.0),
            GearItem::new("Solo Tarp", Category::Shelter, 10.0),
        ];
        let report = recommend(&items);
        assert_eq!(
            report.looking_good[0].message,
            format!("{} Your Shelter, Shelter is already optimized.", RESEARCH_NOTE)
        );
    }

    #[test]
    fn test_heavy_list_without_light_big_three_has_no_note() {
        let items = vec![
            GearItem::new("Expedition Tent", Category::Shelter, 200.0),
            GearItem::new("Expedition Pack", Category::Backpack, 100.0),
        ];
        let report = recommend(&items);
        assert!(report.looking_good.is_empty());
        assert_eq!(report.weight_class, WeightClass::Lightweight);
    }

    #[test]
    fn test_unknown_category_gets_no_alternatives() {
        let items = vec![GearItem::new(
            "Kite",
            Category::Other("fun".to_string()),
            40.0,
        )];
        let report = recommend(&items);
        assert!(report.high_priority.is_empty());
        assert!(report.medium_priority.is_empty());
    }

    #[test]
    fn test_report_serializes_wire_names() {
        let items = vec![GearItem::new("REI Flash 55", Category::Backpack, 38.0)];
        let json = serde_json::to_value(recommend(&items)).unwrap();
        let swap = &json["highPriority"][0];
        assert_eq!(swap["type"], "swap");
        assert_eq!(swap["currentItem"]["weight_oz"], 38);
        assert!(swap["recommendedItem"]["weight_oz"].is_number());
        assert!(swap["savingsOz"].is_number());
        assert!(swap["why"].is_string());
        assert_eq!(json["weightClass"], "Ultralight");
    }
}
