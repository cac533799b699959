//! Starter gear lists from a trip profile
//!
//! Builds a deterministic beginner list from a compiled-in option table,
//! picking one tier (budget, mid-range or premium) and trimming or adding
//! items for season, terrain and experience.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, GearItem};
use crate::shakedown::GearSummary;

macro_rules! profile_enum {
    ($(#[$meta:meta])* $name:ident, $label:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!("Unknown {}: {}", $label, s)),
                }
            }
        }
    };
}

profile_enum!(
    /// Trip length
    TripType, "trip type" {
        Weekend => "weekend",
        OneWeek => "1-week",
        MultiWeek => "2+weeks",
    }
);

profile_enum!(
    Season, "season" {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
    }
);

profile_enum!(
    Terrain, "terrain" {
        Easy => "easy",
        Moderate => "moderate",
        Difficult => "difficult",
    }
);

profile_enum!(
    Experience, "experience level" {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Expert => "expert",
    }
);

profile_enum!(
    /// Price tier of the option table
    BudgetTier, "budget" {
        Budget => "budget",
        MidRange => "mid-range",
        Premium => "premium",
    }
);

/// What the hiker is planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripProfile {
    pub trip_type: TripType,
    pub season: Season,
    pub terrain: Terrain,
    pub experience: Experience,
    pub budget: BudgetTier,
}

/// A generated starter list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterList {
    pub profile: TripProfile,
    pub gear_list: Vec<GearItem>,
    pub summary: GearSummary,
}

/// One row of the option table
#[derive(Debug)]
pub struct StarterOption {
    pub name: &'static str,
    pub weight_oz: f64,
    pub price: f64,
    pub category: Category,
}

impl StarterOption {
    fn to_item(&self) -> GearItem {
        GearItem::new(self.name, self.category.clone(), self.weight_oz).with_price(self.price)
    }
}

/// Options for one gear slot, per price tier
pub struct Tiered {
    pub budget: &'static [StarterOption],
    pub mid_range: &'static [StarterOption],
    pub premium: &'static [StarterOption],
}

impl Tiered {
    pub fn for_budget(&self, budget: BudgetTier) -> &'static [StarterOption] {
        match budget {
            BudgetTier::Budget => self.budget,
            BudgetTier::MidRange => self.mid_range,
            BudgetTier::Premium => self.premium,
        }
    }
}

const fn opt(name: &'static str, weight_oz: f64, price: f64, category: Category) -> StarterOption {
    StarterOption {
        name,
        weight_oz,
        price,
        category,
    }
}

static SHELTERS: Tiered = Tiered {
    budget: &[
        opt("Lanshan 2 Tent", 42.0, 120.0, Category::Shelter),
        opt("Paria Breeze Mesh Tent", 32.0, 140.0, Category::Shelter),
    ],
    mid_range: &[
        opt("Gossamer Gear The One", 16.9, 295.0, Category::Shelter),
        opt("Tarptent Double Rainbow", 42.0, 379.0, Category::Shelter),
    ],
    premium: &[
        opt("Zpacks Duplex", 19.4, 699.0, Category::Shelter),
        opt("Big Agnes Fly Creek HV UL2", 28.0, 450.0, Category::Shelter),
    ],
};

static SLEEP: Tiered = Tiered {
    budget: &[
        opt("Hyke & Byke Sleeping Bag", 32.0, 150.0, Category::SleepingBag),
        opt("Klymit Static V Pad", 18.0, 50.0, Category::SleepingPad),
    ],
    mid_range: &[
        opt("Enlightened Equipment Revelation 30°", 18.0, 285.0, Category::SleepingBag),
        opt("Therm-a-Rest NeoAir XLite", 12.0, 200.0, Category::SleepingPad),
    ],
    premium: &[
        opt("Western Mountaineering UltraLite 20°", 25.0, 575.0, Category::SleepingBag),
        opt("Nemo Tensor Insulated", 15.0, 200.0, Category::SleepingPad),
    ],
};

static BACKPACKS: Tiered = Tiered {
    budget: &[opt("Granite Gear Crown2 60", 38.0, 200.0, Category::Backpack)],
    mid_range: &[
        opt("Gossamer Gear Mariposa 60", 28.0, 325.0, Category::Backpack),
        opt("ULA Circuit", 36.0, 265.0, Category::Backpack),
    ],
    premium: &[
        opt("Zpacks Arc Blast", 16.9, 375.0, Category::Backpack),
        opt("Hyperlite Mountain Gear 3400", 28.0, 365.0, Category::Backpack),
    ],
};

static COOKING: Tiered = Tiered {
    budget: &[
        opt("BRS-3000T Stove", 0.9, 20.0, Category::Cooking),
        opt("Imusa 12cm Pot", 5.0, 12.0, Category::Cooking),
    ],
    mid_range: &[
        opt("MSR PocketRocket 2", 2.6, 50.0, Category::Cooking),
        opt("Toaks Titanium 550ml Pot", 2.4, 35.0, Category::Cooking),
    ],
    premium: &[
        opt("Soto Windmaster", 3.0, 70.0, Category::Cooking),
        opt("Toaks Titanium 750ml Pot", 3.4, 45.0, Category::Cooking),
    ],
};

static WATER: Tiered = Tiered {
    budget: &[
        opt("Sawyer Mini", 2.0, 25.0, Category::Water),
        opt("Smartwater Bottles (2x 1L)", 1.5, 5.0, Category::Water),
    ],
    mid_range: &[
        opt("Sawyer Squeeze", 3.0, 40.0, Category::Water),
        opt("CNOC Vecto 2L", 2.2, 35.0, Category::Water),
    ],
    premium: &[
        opt("Katadyn BeFree 1L", 2.3, 45.0, Category::Water),
        opt("Platypus Hoser 2L", 3.6, 35.0, Category::Water),
    ],
};

static CLOTHING: Tiered = Tiered {
    budget: &[
        opt("Frogg Toggs Rain Jacket", 6.0, 20.0, Category::Clothing),
        opt("Decathlon Puffy Jacket", 12.0, 60.0, Category::Clothing),
    ],
    mid_range: &[
        opt("Patagonia Houdini", 3.5, 99.0, Category::Clothing),
        opt("Outdoor Research Helium Down Hoodie", 10.6, 269.0, Category::Clothing),
    ],
    premium: &[
        opt("Montbell Plasma 1000", 6.9, 379.0, Category::Clothing),
        opt("Arc'teryx Squamish Hoody", 5.4, 140.0, Category::Clothing),
    ],
};

static WINTER_MITTENS: Tiered = Tiered {
    budget: &[opt("Down Mittens", 4.0, 30.0, Category::Clothing)],
    mid_range: &[opt("Montbell Down Mittens", 2.5, 60.0, Category::Clothing)],
    premium: &[opt("Feathered Friends Down Mittens", 2.0, 90.0, Category::Clothing)],
};

static ELECTRONICS: Tiered = Tiered {
    budget: &[
        opt("Generic Headlamp", 2.0, 15.0, Category::Electronics),
        opt("Anker PowerCore 10000", 6.4, 30.0, Category::Electronics),
    ],
    mid_range: &[
        opt("Nitecore NU25", 1.1, 40.0, Category::Electronics),
        opt("Anker PowerCore 10000 PD", 6.8, 40.0, Category::Electronics),
    ],
    premium: &[
        opt("Petzl Bindi", 1.2, 50.0, Category::Electronics),
        opt("Nitecore NB10000", 5.3, 50.0, Category::Electronics),
    ],
};

static FIRST_AID: Tiered = Tiered {
    budget: &[opt("Basic First Aid Kit", 5.0, 20.0, Category::FirstAid)],
    mid_range: &[opt("Adventure Medical Ultralight", 5.6, 40.0, Category::FirstAid)],
    premium: &[opt("Custom Ultralight First Aid", 3.0, 50.0, Category::FirstAid)],
};

static MISC: Tiered = Tiered {
    budget: &[
        opt("Plastic Trowel", 1.2, 8.0, Category::Misc),
        opt("Regular Lighter", 0.6, 2.0, Category::Misc),
    ],
    mid_range: &[
        opt("Deuce of Spades", 0.6, 20.0, Category::Misc),
        opt("Litesmith Mini Bic", 0.4, 5.0, Category::Misc),
    ],
    premium: &[
        opt("Ti Goat Ti Trowel", 0.3, 35.0, Category::Misc),
        opt("Litesmith Mini Bic", 0.4, 5.0, Category::Misc),
    ],
};

/// Build a starter list for a trip profile
pub fn starter_list(profile: TripProfile) -> StarterList {
    let budget = profile.budget;
    let mut options: Vec<&StarterOption> = Vec::new();

    options.extend(SHELTERS.for_budget(budget));
    options.extend(SLEEP.for_budget(budget));
    options.extend(BACKPACKS.for_budget(budget).first());

    // Experienced hikers can go stoveless in summer
    if !(profile.experience == Experience::Expert && profile.season == Season::Summer) {
        options.extend(COOKING.for_budget(budget));
    }

    options.extend(WATER.for_budget(budget));

    if profile.season == Season::Winter || profile.terrain == Terrain::Difficult {
        options.extend(CLOTHING.for_budget(budget));
        if profile.season == Season::Winter {
            options.extend(WINTER_MITTENS.for_budget(budget));
        }
    } else {
        options.extend(CLOTHING.for_budget(budget).first());
    }

    options.extend(ELECTRONICS.for_budget(budget));
    options.extend(FIRST_AID.for_budget(budget).first());
    options.extend(MISC.for_budget(budget));

    let gear_list: Vec<GearItem> = options.iter().map(|option| option.to_item()).collect();
    let summary = GearSummary::from_items(&gear_list);

    StarterList {
        profile,
        gear_list,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(season: Season, terrain: Terrain, experience: Experience, budget: BudgetTier) -> TripProfile {
        TripProfile {
            trip_type: TripType::Weekend,
            season,
            terrain,
            experience,
            budget,
        }
    }

    fn names(list: &StarterList) -> Vec<&str> {
        list.gear_list.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_profile_enums_parse_wire_values() {
        assert_eq!("2+weeks".parse::<TripType>(), Ok(TripType::MultiWeek));
        assert_eq!("Mid-Range".parse::<BudgetTier>(), Ok(BudgetTier::MidRange));
        assert_eq!(Season::Fall.to_string(), "fall");
        assert!("tropical".parse::<Season>().is_err());
    }

    #[test]
    fn test_profile_deserializes_camel_case() {
        let parsed: TripProfile = serde_json::from_str(
            r#"{"tripType": "1-week", "season": "winter", "terrain": "easy",
                "experience": "beginner", "budget": "premium"}"#,
        )
        .unwrap();
        assert_eq!(parsed.trip_type, TripType::OneWeek);
        assert_eq!(parsed.budget, BudgetTier::Premium);
    }

    #[test]
    fn test_mid_range_summer_list() {
        let list = starter_list(profile(
            Season::Summer,
            Terrain::Moderate,
            Experience::Intermediate,
            BudgetTier::MidRange,
        ));
        assert_eq!(
            names(&list),
            vec![
                "Gossamer Gear The One",
                "Tarptent Double Rainbow",
                "Enlightened Equipment Revelation 30°",
                "Therm-a-Rest NeoAir XLite",
                "Gossamer Gear Mariposa 60",
                "MSR PocketRocket 2",
                "Toaks Titanium 550ml Pot",
                "Sawyer Squeeze",
                "CNOC Vecto 2L",
                "Patagonia Houdini",
                "Nitecore NU25",
                "Anker PowerCore 10000 PD",
                "Adventure Medical Ultralight",
                "Deuce of Spades",
                "Litesmith Mini Bic",
            ]
        );
        assert_eq!(list.summary.total_items, 15);
    }

    #[test]
    fn test_expert_summer_skips_cooking() {
        let list = starter_list(profile(
            Season::Summer,
            Terrain::Easy,
            Experience::Expert,
            BudgetTier::Budget,
        ));
        assert!(list
            .gear_list
            .iter()
            .all(|item| item.category != Category::Cooking));
    }

    #[test]
    fn test_winter_adds_all_clothing_and_mittens() {
        let list = starter_list(profile(
            Season::Winter,
            Terrain::Easy,
            Experience::Beginner,
            BudgetTier::Premium,
        ));
        let clothing: Vec<&str> = list
            .gear_list
            .iter()
            .filter(|item| item.category == Category::Clothing)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            clothing,
            vec![
                "Montbell Plasma 1000",
                "Arc'teryx Squamish Hoody",
                "Feathered Friends Down Mittens"
            ]
        );
    }

    #[test]
    fn test_difficult_terrain_adds_clothing_without_mittens() {
        let list = starter_list(profile(
            Season::Fall,
            Terrain::Difficult,
            Experience::Beginner,
            BudgetTier::Budget,
        ));
        let clothing = list
            .gear_list
            .iter()
            .filter(|item| item.category == Category::Clothing)
            .count();
        assert_eq!(clothing, 2);
    }

    #[test]
    fn test_summary_and_categories() {
        let list = starter_list(profile(
            Season::Spring,
            Terrain::Easy,
            Experience::Beginner,
            BudgetTier::Budget,
        ));
        // 42 + 32 + 32 + 18 + 38 + 0.9 + 5 + 2 + 1.5 + 6 + 2 + 6.4 + 5 + 1.2 + 0.6
        assert_eq!(list.summary.total_weight_oz, 193);
        assert_eq!(list.summary.total_price, 817.0);
        assert!(list.gear_list.iter().all(|item| item.category.is_canonical()));
        assert!(list
            .gear_list
            .iter()
            .any(|item| item.category == Category::SleepingPad));
    }
}
