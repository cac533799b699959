//! Category normalization for imported and hand-entered gear lists
//!
//! Gear list categories arrive as free-form labels ("Big Three", "Cooking &
//! Water", "Worn Items"). `normalize_category` resolves a label plus the item
//! name to one of the canonical categories using ordered rule tables. Within
//! each table the first matching rule wins, so the tables double as the
//! priority order.
//!
//! Resolution order:
//! 1. empty label → Misc
//! 2. "big three" umbrella → pack / pad / bag / shelter by item name, else Misc
//! 3. cooking or water umbrella → cooking / water / misc by item name, else Cooking
//! 4. direct label synonyms (health, electronics, clothing, misc)
//! 5. item-name keyword cascade over every canonical category
//! 6. the label itself: its canonical category if it names one, otherwise
//!    the lower-cased label as `Category::Other`
//!
//! A label that already names a category ("Water", "Shelter") still goes
//! through the item-name rules, so a pot filed under "Water" becomes Cooking.

use tracing::debug;

use crate::models::Category;

/// A category selected when any of its keywords occurs in the text
#[derive(Debug)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

const SHELTER_KEYWORDS: &[&str] = &["tent", "hammock", "fly", "stakes", "straps"];

const SLEEPING_BAG_KEYWORDS: &[&str] = &[
    "sleeping bag",
    "quilt",
    "liner",
    "revelation",
    "enigma",
    "spark",
];

// Leading/trailing spaces keep "pad" and "mat" from matching inside words
const SLEEPING_PAD_KEYWORDS: &[&str] = &[
    "sleeping pad",
    " pad",
    "neoair",
    "tensor",
    "z-lite",
    "zlite",
    "q-core",
    "qcore",
    "mat ",
    "mattress",
];

const BACKPACK_KEYWORDS: &[&str] = &["backpack"];

const COOKING_KEYWORDS: &[&str] = &["stove", "cup", "spork", "pot", "cozy"];

const WATER_KEYWORDS: &[&str] = &[
    "bottle",
    "filtration",
    "platypus",
    "syringe",
    "mesh bag",
    "cap",
];

const ELECTRONICS_KEYWORDS: &[&str] = &[
    "power bank",
    "headlamp",
    "gps",
    "charging",
    "usb",
    "cable",
    "ear buds",
];

const CLOTHING_KEYWORDS: &[&str] = &[
    "jacket",
    "gloves",
    "headband",
    "shirt",
    "pants",
    "socks",
    "underwear",
    "gaiters",
    "hat",
    "boots",
    "hoody",
    "bra",
];

const MISC_KEYWORDS: &[&str] = &["journal", "pencil", "whistle", "bags", "trekking poles"];

/// Item-name rules for the "big three" umbrella label
pub static BIG_THREE_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Backpack,
        keywords: BACKPACK_KEYWORDS,
    },
    KeywordRule {
        category: Category::SleepingPad,
        keywords: SLEEPING_PAD_KEYWORDS,
    },
    KeywordRule {
        category: Category::SleepingBag,
        keywords: SLEEPING_BAG_KEYWORDS,
    },
    KeywordRule {
        category: Category::Shelter,
        keywords: SHELTER_KEYWORDS,
    },
];

/// Item-name rules for the combined cooking and water umbrella label
pub static KITCHEN_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Cooking,
        keywords: COOKING_KEYWORDS,
    },
    KeywordRule {
        category: Category::Water,
        keywords: WATER_KEYWORDS,
    },
    // Bear canisters ride along with food but are not cookware
    KeywordRule {
        category: Category::Misc,
        keywords: &["bear"],
    },
];

/// Label synonyms that map straight to a category
pub static LABEL_SYNONYMS: &[KeywordRule] = &[
    KeywordRule {
        category: Category::FirstAid,
        keywords: &["health", "first aid"],
    },
    KeywordRule {
        category: Category::Electronics,
        keywords: &["electr"],
    },
    KeywordRule {
        category: Category::Clothing,
        keywords: &["cloth"],
    },
    KeywordRule {
        category: Category::Misc,
        keywords: &["misc"],
    },
];

/// Category-agnostic item-name cascade, in priority order
pub static NAME_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Shelter,
        keywords: SHELTER_KEYWORDS,
    },
    KeywordRule {
        category: Category::SleepingBag,
        keywords: SLEEPING_BAG_KEYWORDS,
    },
    KeywordRule {
        category: Category::SleepingPad,
        keywords: SLEEPING_PAD_KEYWORDS,
    },
    KeywordRule {
        category: Category::Backpack,
        keywords: BACKPACK_KEYWORDS,
    },
    KeywordRule {
        category: Category::Cooking,
        keywords: COOKING_KEYWORDS,
    },
    KeywordRule {
        category: Category::Water,
        keywords: WATER_KEYWORDS,
    },
    KeywordRule {
        category: Category::Electronics,
        keywords: ELECTRONICS_KEYWORDS,
    },
    KeywordRule {
        category: Category::Clothing,
        keywords: CLOTHING_KEYWORDS,
    },
    KeywordRule {
        category: Category::Misc,
        keywords: MISC_KEYWORDS,
    },
];

/// Return the category of the first rule matching `text`
pub fn first_match(rules: &[KeywordRule], text: &str) -> Option<Category> {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.category.clone())
}

/// Classify an item from its name alone
pub fn classify_by_name(item_name: &str) -> Option<Category> {
    first_match(NAME_RULES, &item_name.to_lowercase())
}

/// Resolve a raw category label and item name to a category
///
/// Never fails. The result is canonical unless neither the label nor the
/// item name is recognized, in which case the lower-cased, trimmed label is
/// passed through as `Category::Other`. Callers that need a strictly
/// canonical category must check `Category::is_canonical` themselves.
pub fn normalize_category(raw_category: Option<&str>, item_name: &str) -> Category {
    let label = match raw_category.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_lowercase(),
        _ => return Category::Misc,
    };
    let name = item_name.to_lowercase();

    if label.contains("big three") {
        return first_match(BIG_THREE_RULES, &name).unwrap_or(Category::Misc);
    }

    if label.contains("cooking") || label.contains("water") {
        return first_match(KITCHEN_RULES, &name).unwrap_or(Category::Cooking);
    }

    if let Some(category) = first_match(LABEL_SYNONYMS, &label) {
        return category;
    }

    if let Some(category) = first_match(NAME_RULES, &name) {
        return category;
    }

    if let Some(category) = Category::canonical(&label) {
        return category;
    }

    debug!(
        "No category rule matched label '{}' for '{}', passing label through",
        label, item_name
    );
    Category::Other(label)
}
