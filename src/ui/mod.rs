pub mod cart;
pub mod common;
pub mod fonts;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod sections;
pub mod seo;
pub mod theme;

pub use icon::{FeatureIcon, Icon};
pub use pages::{HomePage, NotFoundPage, ProductPage};
pub use theme::{ThemeConfig, ThemeContext, provide_theme_context, use_theme_context};
