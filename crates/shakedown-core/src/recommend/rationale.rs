//! Rationale text for high-priority swaps
//!
//! One template per category of the item being replaced, plus a fallback.
//! Templates are plain functions so each can be tested on its own.

use crate::models::{round_to, AlternativeItem, Category, GearItem, OZ_PER_LB};

/// Everything a template may reference
pub struct RationaleInput<'a> {
    pub current: &'a GearItem,
    pub alternative: &'a AlternativeItem,
    /// Savings in pounds, one decimal
    pub savings_lbs: String,
}

type Template = fn(&RationaleInput<'_>) -> String;

fn shelter(input: &RationaleInput<'_>) -> String {
    format!(
        "The {} will save you significant weight and is proven on long trails. \
         Yes, it's pricier, but for a thru-hike the weight savings compound daily. \
         {} is great but overkill for solo + ultralight goals.",
        input.alternative.name, input.current.name
    )
}

fn sleeping_bag(input: &RationaleInput<'_>) -> String {
    format!(
        "A quilt will save major weight. The {} is battle-tested on major trails. \
         Since you're going in warmer months, consider the lighter version for even more savings.",
        input.alternative.name
    )
}

fn sleeping_pad(input: &RationaleInput<'_>) -> String {
    format!(
        "The {} offers a great weight-to-comfort ratio. {}lbs saved on your sleeping pad \
         means easier carries and less fatigue over long days.",
        input.alternative.name, input.savings_lbs
    )
}

fn backpack(input: &RationaleInput<'_>) -> String {
    format!(
        "With lighter shelter and sleep system, you can drop to {}. \
         This saves {}lbs and your back will thank you after 20+ mile days.",
        input.alternative.name, input.savings_lbs
    )
}

fn cooking(input: &RationaleInput<'_>) -> String {
    format!(
        "The {} is ultralight and sufficient for most meals. \
         Consider cold-soaking to eliminate cooking gear entirely.",
        input.alternative.name
    )
}

fn clothing(input: &RationaleInput<'_>) -> String {
    format!(
        "{} provides same protection at {}oz. \
         Layer strategically instead of heavy single pieces.",
        input.alternative.name, input.alternative.weight_oz
    )
}

fn fallback(input: &RationaleInput<'_>) -> String {
    format!(
        "Switching to {} saves {}lbs without sacrificing functionality.",
        input.alternative.name, input.savings_lbs
    )
}

/// Template for the category of the item being replaced
pub fn template_for(category: &Category) -> Template {
    match category {
        Category::Shelter => shelter,
        Category::SleepingBag => sleeping_bag,
        Category::SleepingPad => sleeping_pad,
        Category::Backpack => backpack,
        Category::Cooking => cooking,
        Category::Clothing => clothing,
        _ => fallback,
    }
}

/// Build the `why` text for replacing `current` with `alternative`
pub fn why_text(current: &GearItem, alternative: &AlternativeItem, savings_oz: f64) -> String {
    let input = RationaleInput {
        current,
        alternative,
        // Round first: `{:.1}` alone sends exact ties like 1.25 to even
        savings_lbs: format!("{:.1}", round_to(savings_oz / OZ_PER_LB, 1)),
    };
    template_for(&current.category)(&input)
}
