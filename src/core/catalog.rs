//! Product catalog: the single product record the page is rendered from.
//!
//! The record is built once, validated, and handed out by shared reference.
//! Nothing downstream mutates or re-sorts it.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One marketed product attribute
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Feature {
    /// Stable identifier, unique within a product
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon key, resolved by [`crate::core::icons::resolve`]
    pub icon: String,
}

impl Feature {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// The product described by the page
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Product {
    pub name: String,
    /// Tagline shown under the name
    pub benefit: String,
    /// Decimal price without minor-unit scaling (1297 means 1,297.00)
    pub price: f64,
    /// ISO-4217 style code, shown verbatim next to the price
    pub currency: String,
    /// Display order is significant
    pub features: Vec<Feature>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        benefit: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            benefit: benefit.into(),
            price,
            currency: currency.into(),
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Look up a feature by id
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Run every check and collect all problems
    pub fn check(&self) -> CatalogReport {
        let mut report = CatalogReport::default();

        if self.name.trim().is_empty() {
            report.errors.push(CatalogError::EmptyName);
        }

        if !self.price.is_finite() {
            report.errors.push(CatalogError::NonFinitePrice);
        } else if self.price < 0.0 {
            report.errors.push(CatalogError::NegativePrice(self.price));
        }

        if self.currency.trim().is_empty() {
            report.errors.push(CatalogError::EmptyCurrency);
        }

        if self.features.is_empty() {
            report.errors.push(CatalogError::NoFeatures);
        }

        let mut seen = HashSet::new();
        for (position, feature) in self.features.iter().enumerate() {
            if feature.id.trim().is_empty() {
                report.errors.push(CatalogError::MissingFeatureId { position });
            } else if !seen.insert(feature.id.as_str()) {
                report.errors.push(CatalogError::DuplicateFeatureId {
                    id: feature.id.clone(),
                });
            }
        }

        report
    }

    /// Validate the record, returning the first problem found
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.check().into_result()
    }

    /// Consume and return the product only if it passes validation
    pub fn validated(self) -> Result<Self, CatalogError> {
        self.validate()?;
        Ok(self)
    }
}

/// Reasons a product record is rejected before the first render
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("product name cannot be empty")]
    EmptyName,

    #[error("product price must be a finite number")]
    NonFinitePrice,

    #[error("product price cannot be negative (got {0})")]
    NegativePrice(f64),

    #[error("product currency cannot be empty")]
    EmptyCurrency,

    #[error("product must list at least one feature")]
    NoFeatures,

    #[error("feature at position {position} has no id")]
    MissingFeatureId { position: usize },

    #[error("feature id '{id}' is used more than once")]
    DuplicateFeatureId { id: String },
}

/// All problems found in a product record
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    pub errors: Vec<CatalogError>,
}

impl CatalogReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), CatalogError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

static PRODUCT: LazyLock<Product> = LazyLock::new(messenger_bag);

/// The product shown on the page
pub fn product() -> &'static Product {
    &PRODUCT
}

fn messenger_bag() -> Product {
    Product::new(
        "Premium Leather Messenger Bag",
        "Carry your essentials in timeless style.",
        1297.0,
        "USD",
    )
    .with_feature(Feature::new(
        "feature-1",
        "Full-Grain Italian Leather",
        "Crafted from the finest full-grain Italian leather, sourced from certified tanneries in Tuscany. This premium material develops a rich patina over time, making each bag uniquely yours.",
        "award",
    ))
    .with_feature(Feature::new(
        "feature-2",
        "YKK Heavy-Duty Brass Zippers",
        "Equipped with premium YKK brass zippers that glide smoothly and resist corrosion. These industry-leading zippers are tested to withstand over 10,000 open-close cycles.",
        "zap",
    ))
    .with_feature(Feature::new(
        "feature-3",
        "Padded Laptop Compartment",
        "Dedicated padded compartment fits laptops up to 15 inches. Soft microfiber lining protects your device from scratches while foam padding guards against impacts.",
        "laptop",
    ))
    .with_feature(Feature::new(
        "feature-4",
        "Adjustable Leather Strap",
        "Premium leather shoulder strap adjusts from 43 to 54 inches for perfect fit. Padded section distributes weight evenly for all-day comfort, even when fully loaded.",
        "move",
    ))
    .with_feature(Feature::new(
        "feature-5",
        "Lifetime Craftsmanship Warranty",
        "We stand behind our work with a lifetime warranty covering all stitching, hardware, and materials. If anything fails due to craftsmanship, we will repair or replace it free of charge.",
        "shield-check",
    ))
    .with_feature(Feature::new(
        "feature-6",
        "Hand-Stitched Reinforced Seams",
        "Every seam is reinforced with hand-stitching using industrial-grade waxed thread. This traditional technique ensures your bag can handle heavy loads for decades.",
        "scissors",
    ))
    .with_feature(Feature::new(
        "feature-7",
        "Multiple Interior Pockets",
        "Thoughtfully designed interior includes multiple pockets and organizer compartments for pens, phone, keys, wallet, and documents. Everything has its place.",
        "grid",
    ))
    .with_feature(Feature::new(
        "feature-8",
        "Weather-Resistant Waxed Finish",
        "Hand-applied waxed finish provides natural water resistance. Light rain beads off the surface, protecting your belongings. The wax can be reapplied to maintain protection.",
        "cloud-rain",
    ))
    .with_feature(Feature::new(
        "feature-9",
        "Antique Brass Hardware",
        "All metal hardware is solid antique brass that will not rust or tarnish. Each piece is individually cast and hand-finished for exceptional durability and timeless aesthetic.",
        "sparkles",
    ))
    .with_feature(Feature::new(
        "feature-10",
        "Handcrafted in Small Batches",
        "Each bag is handcrafted by skilled artisans in limited batches of 50. This ensures meticulous attention to detail and maintains the highest quality standards.",
        "hand",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Product {
        Product::new("Bag", "Carry it", 10.0, "USD").with_feature(Feature::new(
            "f1", "Title", "Body", "award",
        ))
    }

    #[test]
    fn test_canonical_product_is_valid() {
        assert!(product().validate().is_ok());
        assert_eq!(product().features.len(), 10);
        assert_eq!(product().price, 1297.0);
        assert_eq!(product().currency, "USD");
    }

    #[test]
    fn test_canonical_feature_order() {
        let ids: Vec<&str> = product().features.iter().map(|f| f.id.as_str()).collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("feature-{}", i)).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_feature_lookup() {
        let feature = product().feature("feature-5");
        assert!(feature.is_some());
        assert_eq!(feature.unwrap().icon, "shield-check");
        assert!(product().feature("feature-99").is_none());
    }

    #[test]
    fn test_empty_features_rejected() {
        let bag = Product::new("Bag", "Carry it", 10.0, "USD");
        assert_eq!(bag.validate(), Err(CatalogError::NoFeatures));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut bag = minimal();
        bag.price = -1.0;
        assert_eq!(bag.validate(), Err(CatalogError::NegativePrice(-1.0)));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let mut bag = minimal();
        bag.price = f64::NAN;
        assert_eq!(bag.validate(), Err(CatalogError::NonFinitePrice));

        bag.price = f64::INFINITY;
        assert_eq!(bag.validate(), Err(CatalogError::NonFinitePrice));
    }

    #[test]
    fn test_zero_price_allowed() {
        let mut bag = minimal();
        bag.price = 0.0;
        assert!(bag.validate().is_ok());
    }

    #[test]
    fn test_duplicate_feature_id_rejected() {
        let bag = minimal().with_feature(Feature::new("f1", "Again", "Body", "zap"));
        assert_eq!(
            bag.validate(),
            Err(CatalogError::DuplicateFeatureId {
                id: "f1".to_string()
            })
        );
    }

    #[test]
    fn test_missing_feature_id_rejected() {
        let bag = minimal().with_feature(Feature::new("  ", "Blank", "Body", "zap"));
        assert_eq!(
            bag.validate(),
            Err(CatalogError::MissingFeatureId { position: 1 })
        );
    }

    #[test]
    fn test_report_collects_every_problem() {
        let bag = Product::new("", "Carry it", -5.0, "");
        let report = bag.check();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 4);
        assert_eq!(report.errors[0], CatalogError::EmptyName);
        assert_eq!(report.errors[3], CatalogError::NoFeatures);
    }

    #[test]
    fn test_validated_returns_product() {
        let bag = minimal().validated().unwrap();
        assert_eq!(bag.name, "Bag");
        assert!(Product::new("Bag", "", 1.0, "USD").validated().is_err());
    }

    #[test]
    fn test_unknown_icon_key_is_not_a_validation_error() {
        let bag = Product::new("Bag", "Carry it", 10.0, "USD")
            .with_feature(Feature::new("f1", "Title", "Body", "no-such-icon"));
        assert!(bag.validate().is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CatalogError::NegativePrice(-2.5).to_string(),
            "product price cannot be negative (got -2.5)"
        );
        assert_eq!(
            CatalogError::DuplicateFeatureId {
                id: "feature-1".to_string()
            }
            .to_string(),
            "feature id 'feature-1' is used more than once"
        );
    }

    #[test]
    fn test_product_json_roundtrip_keeps_order() {
        let json = serde_json::to_string(product()).unwrap();
        let decoded: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(&decoded, product());
    }
}
