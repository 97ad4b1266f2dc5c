//! Product page sections

pub mod blobs;
pub mod feature_card;
pub mod features;
pub mod hero;
pub mod pricing;

pub use blobs::OrganicBlobs;
pub use feature_card::FeatureCard;
pub use features::ProductFeatures;
pub use hero::ProductHero;
pub use pricing::ProductPricing;
