//! Lightweight gear alternatives
//!
//! A compiled-in, read-only catalog of replacement items per canonical
//! category. Lists keep declaration order; ranking by weight happens at
//! recommendation time.

use crate::models::{AlternativeItem, Category};

/// Source of replacement candidates for a category
///
/// The recommendation engine only sees the catalog through this trait, so
/// tests can swap in a small hand-built catalog.
pub trait AlternativeSource {
    /// Ordered candidates for `category`; empty when the category is unknown
    fn alternatives_for(&self, category: &Category) -> &[AlternativeItem];
}

/// The built-in alternatives catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl AlternativeSource for BuiltinCatalog {
    fn alternatives_for(&self, category: &Category) -> &[AlternativeItem] {
        alternatives_for(category)
    }
}

/// Built-in candidates for a category
pub fn alternatives_for(category: &Category) -> &'static [AlternativeItem] {
    match category {
        Category::Shelter => SHELTER,
        Category::SleepingBag => SLEEPING_BAG,
        Category::SleepingPad => SLEEPING_PAD,
        Category::Backpack => BACKPACK,
        Category::Cooking => COOKING,
        Category::Water => WATER,
        Category::Clothing => CLOTHING,
        Category::Electronics => ELECTRONICS,
        Category::FirstAid => FIRST_AID,
        Category::Misc => MISC,
        Category::Other(_) => &[],
    }
}

const fn alt(
    name: &'static str,
    weight_oz: f64,
    price: f64,
    description: &'static str,
    url: &'static str,
) -> AlternativeItem {
    AlternativeItem {
        name,
        weight_oz,
        price,
        description,
        url,
    }
}

static SHELTER: &[AlternativeItem] = &[
    alt("Zpacks Duplex", 19.4, 699.0, "Ultralight 2-person tent", "https://zpacks.com/products/duplex-tent"),
    alt("Gossamer Gear The One", 16.9, 295.0, "Single-person ultralight tent", "https://www.gossamergear.com/products/the-one"),
    alt("Six Moon Designs Lunar Solo", 26.0, 230.0, "Popular solo tent", "https://www.sixmoondesigns.com/products/lunar-solo"),
    alt("Sea to Summit Escapist Tarp", 10.5, 200.0, "Ultralight tarp shelter", "https://seatosummit.com/products/escapist-tarp/"),
];

static SLEEPING_BAG: &[AlternativeItem] = &[
    alt("Enlightened Equipment Revelation 20°", 16.6, 325.0, "Ultralight quilt", "https://enlightenedequipment.com/revelation-quilt/"),
    alt("Sea to Summit Spark I", 12.0, 379.0, "Ultralight sleeping bag", "https://seatosummit.com/products/spark-sleeping-bag/"),
    alt("Enlightened Equipment Enigma 30°", 14.0, 285.0, "Lightweight summer quilt", "https://enlightenedequipment.com/enigma-quilt/"),
];

static SLEEPING_PAD: &[AlternativeItem] = &[
    alt("Therm-a-Rest NeoAir XLite", 12.0, 200.0, "Ultralight inflatable pad", "https://www.thermarest.com/sleeping-pads/neoair-xlite-nxt-sleeping-pad/neoair-xlite-nxt.html"),
    alt("Nemo Tensor Insulated", 15.0, 200.0, "Lightweight insulated pad", "https://www.nemoequipment.com/products/tensor"),
    alt("Therm-a-Rest Z-Lite Sol", 10.0, 50.0, "Foam sleeping pad", "https://www.thermarest.com/sleeping-pads/closed-cell-foam/z-lite-sol-sleeping-pad/z-lite-sol.html"),
];

static BACKPACK: &[AlternativeItem] = &[
    alt("Gossamer Gear Mariposa 60", 28.0, 325.0, "Lightweight 60L pack", "https://www.gossamergear.com/products/mariposa-60-backpack"),
    alt("ULA Circuit", 36.0, 265.0, "Popular lightweight pack", "https://www.ula-equipment.com/product/circuit/"),
    alt("Zpacks Arc Blast", 16.9, 375.0, "Ultralight frameless pack", "https://zpacks.com/products/arc-blast-backpack"),
    alt("Granite Gear Crown2 60", 38.0, 200.0, "Budget lightweight pack", "https://www.granitegear.com/crown2-60.html"),
    alt("Pa’lante V2", 16.0, 270.0, "Minimalist ultralight pack", "https://palantepacks.com/products/v2"),
];

static COOKING: &[AlternativeItem] = &[
    alt("Toaks Titanium 550ml Pot", 2.4, 35.0, "Ultralight titanium pot", "https://www.toaksoutdoor.com/products/titanium-550ml-pot"),
    alt("MSR PocketRocket 2", 2.6, 50.0, "Compact ultralight stove", "https://www.msrgear.com/stoves/canister-stoves/pocketrocket-2-stove/09884.html"),
    alt("BRS-3000T Stove", 0.9, 20.0, "Budget ultralight stove", "https://brsstove.com/collections/stoves/products/brs-3000t"),
    alt("Cold soaking setup", 1.5, 10.0, "No-cook food system", "https://andrewskurka.com/cold-soaking-backpacking-meals-101/"),
    alt("Vargo Titanium Spork", 0.5, 10.0, "Ultralight spork", "https://www.vargooutdoors.com/titanium-spork.html"),
];

static WATER: &[AlternativeItem] = &[
    alt("Sawyer Squeeze", 3.0, 40.0, "Lightweight filter", "https://sawyer.com/products/squeeze-water-filtration-system"),
    alt("CNOC Vecto 2L", 2.2, 35.0, "Ultralight water bag", "https://cnocoutdoors.com/products/vecto-2l-water-container"),
    alt("Smartwater bottles (2x)", 1.5, 5.0, "Budget ultralight bottles", "https://www.smartwater.com/"),
    alt("Platypus Hoser 2L", 3.6, 35.0, "Hydration reservoir", "https://www.platy.com/hoser-2l"),
    alt("Katadyn BeFree Filter", 2.0, 45.0, "Ultralight water filter", "https://www.katadyn.com/us/us/149-8018006-katadyn-befree-1-0l"),
];

static CLOTHING: &[AlternativeItem] = &[
    alt("Patagonia Houdini", 3.5, 99.0, "Ultralight wind jacket", "https://www.patagonia.com/product/mens-houdini-jacket/24142.html"),
    alt("Montbell Plasma 1000", 6.9, 379.0, "Ultralight down jacket", "https://en.montbell.jp/products/goods/list.php?category=1"),
    alt("Frogg Toggs jacket", 6.0, 20.0, "Budget rain jacket", "https://www.froggtoggs.com/"),
    alt("Enlightened Equipment Visp", 6.5, 200.0, "Ultralight rain jacket", "https://enlightenedequipment.com/visp-rain-jacket/"),
    alt("Merino wool base layers", 6.0, 80.0, "Lightweight multi-day layers", "https://www.icebreaker.com/en-us/mens-merino-wool-base-layers"),
    alt("Senchi Designs Alpha 90", 2.5, 90.0, "Ultralight fleece", "https://senchidesigns.com/products/alpha-90-hoodie"),
    alt("Darn Tough Socks", 2.0, 20.0, "Durable lightweight socks", "https://darntough.com/"),
];

static ELECTRONICS: &[AlternativeItem] = &[
    alt("Nitecore NU25", 1.1, 40.0, "Ultralight headlamp", "https://flashlight.nitecore.com/product/nu25"),
    alt("Anker PowerCore 10000 PD", 6.8, 40.0, "Lightweight battery pack", "https://www.anker.com/products/a1235"),
    alt("Garmin inReach Mini", 3.5, 350.0, "Satellite communicator", "https://www.garmin.com/en-US/p/592726"),
];

static FIRST_AID: &[AlternativeItem] = &[
    alt("Ultralight first aid kit", 3.0, 25.0, "Minimal essential supplies", "https://www.trekker.com/ultralight-first-aid"),
    alt("Adventure Medical Ultralight", 5.6, 40.0, "Pre-made ultralight kit", "https://www.adventuremedicalkits.com/us_en/ultralight-watertight-5.html"),
    alt("Ziploc Quart Bag", 0.2, 1.0, "Ultralight storage for first aid", "https://www.ziploc.com/en/products/bags/storage-bags/quart-storage-bags"),
];

static MISC: &[AlternativeItem] = &[
    alt("Deuce of Spades", 0.6, 20.0, "Ultralight trowel", "https://thetentlab.com/products/deuce-backcountry-trowel"),
    alt("Litesmith Mini Bic", 0.4, 5.0, "Minimal lighter", "https://litesmith.com/mini-bic-lighter/"),
    alt("Z-Lite Sol pad", 10.0, 50.0, "Lightweight foam pad", "https://www.thermarest.com/sleeping-pads/closed-cell-foam/z-lite-sol-sleeping-pad/z-lite-sol.html"),
    alt("Kula Cloth", 0.5, 20.0, "Antimicrobial pee cloth", "https://kulacloth.com/"),
];
