//! Core product-page model: data, icon resolution, timing and layout rules

pub mod cart;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod icons;
pub mod layout;
pub mod metadata;
pub mod motion;
pub mod pricing;
pub mod showcase;
#[cfg(test)]
mod tests;

pub use cart::{CartController, CartSettings, RetriggerPolicy, Scheduler};
pub use catalog::{CatalogError, Feature, Product, product};
pub use icons::{IconKey, resolve};
pub use layout::{ViewportTier, grid_columns};
pub use metadata::PageMetadata;
pub use motion::{Reveal, RevealTrigger, stagger_delay};
pub use pricing::PriceTag;
pub use showcase::{CardPlan, TRUST_BADGES, TrustBadge, card_plans};
