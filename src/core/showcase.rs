//! Projection of the product record into page sections.
//!
//! Sections never transform product data; they only attach layout and
//! animation parameters to it. Keeping that projection here lets the page
//! structure be checked without rendering.

use crate::core::catalog::Feature;
use crate::core::icons::{self, IconKey};
use crate::core::motion::{self, Reveal};

/// Everything needed to render one feature card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlan<'a> {
    pub feature: &'a Feature,
    pub index: usize,
    pub icon: IconKey,
    pub reveal: Reveal,
}

impl<'a> CardPlan<'a> {
    pub fn new(feature: &'a Feature, index: usize) -> Self {
        Self {
            feature,
            index,
            icon: icons::resolve(&feature.icon),
            reveal: motion::feature_card(index),
        }
    }
}

/// Cards in list order, each carrying its list position
pub fn card_plans(features: &[Feature]) -> Vec<CardPlan<'_>> {
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| CardPlan::new(feature, index))
        .collect()
}

/// Assurance shown under the pricing call to action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrustBadge {
    Warranty,
    Shipping,
    Returns,
}

/// The pricing section always shows exactly these, in this order
pub const TRUST_BADGES: [TrustBadge; 3] =
    [TrustBadge::Warranty, TrustBadge::Shipping, TrustBadge::Returns];

impl TrustBadge {
    pub fn icon(&self) -> IconKey {
        match self {
            TrustBadge::Warranty => IconKey::ShieldCheck,
            TrustBadge::Shipping => IconKey::Truck,
            TrustBadge::Returns => IconKey::RotateCcw,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TrustBadge::Warranty => "Lifetime Warranty",
            TrustBadge::Shipping => "Free Shipping",
            TrustBadge::Returns => "30-Day Returns",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            TrustBadge::Warranty => "Craftsmanship guaranteed",
            TrustBadge::Shipping => "Orders over $500",
            TrustBadge::Returns => "No questions asked",
        }
    }

    /// Stable identifier for markup and tests
    pub fn slug(&self) -> &'static str {
        match self {
            TrustBadge::Warranty => "warranty",
            TrustBadge::Shipping => "shipping",
            TrustBadge::Returns => "returns",
        }
    }
}

/// Checkmarked selling points in the hero details column
pub const HERO_TRUST_POINTS: [&str; 3] = [
    "Full-grain Italian leather from Tuscany",
    "Handcrafted in small batches of 50",
    "Lifetime craftsmanship warranty",
];

/// Note under the hero call to action
pub const SHIPPING_NOTE: &str =
    "Free shipping on orders over $500. Lifetime craftsmanship warranty included.";

/// Logical path of the hero image asset
pub const HERO_IMAGE_SRC: &str = "/images/messenger-bag-hero.jpg";

/// Accessible description of the hero image
pub const HERO_IMAGE_ALT: &str = "Premium leather messenger bag in rich cognac brown, showcasing full-grain Italian leather with brass hardware";

/// Feature grid heading copy
pub const FEATURES_HEADING: &str = "Crafted for a Lifetime";
pub const FEATURES_INTRO: &str = "Every detail matters. From the leather we source to the hardware we select, this messenger bag is designed to be your trusted companion for decades.";
