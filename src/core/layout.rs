//! Responsive breakpoints.
//!
//! Three width tiers drive every responsive decision on the page: grid
//! column counts and hero image sizing hints. The tiers match Tailwind's
//! `md` (768) and `lg` (1024) breakpoints, so classes generated here and the
//! stylesheet agree.

use derive_more::Display;

/// Smallest width of the medium tier
pub const MEDIUM_MIN_WIDTH: u32 = 768;

/// Smallest width of the wide tier
pub const WIDE_MIN_WIDTH: u32 = 1024;

/// Viewport width tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum ViewportTier {
    /// Below 768
    #[display("narrow")]
    Narrow,
    /// 768 to 1023
    #[display("medium")]
    Medium,
    /// 1024 and up
    #[display("wide")]
    Wide,
}

impl ViewportTier {
    pub const ALL: [ViewportTier; 3] = [ViewportTier::Narrow, ViewportTier::Medium, ViewportTier::Wide];

    pub fn from_width(width: u32) -> Self {
        if width >= WIDE_MIN_WIDTH {
            ViewportTier::Wide
        } else if width >= MEDIUM_MIN_WIDTH {
            ViewportTier::Medium
        } else {
            ViewportTier::Narrow
        }
    }

    /// Tailwind variant prefix for this tier
    fn prefix(&self) -> &'static str {
        match self {
            ViewportTier::Narrow => "",
            ViewportTier::Medium => "md:",
            ViewportTier::Wide => "lg:",
        }
    }

    /// Feature grid columns at this tier
    pub fn grid_columns(&self) -> u8 {
        match self {
            ViewportTier::Narrow => 1,
            ViewportTier::Medium => 2,
            ViewportTier::Wide => 3,
        }
    }
}

/// Feature grid columns for a viewport width. Independent of item count.
pub fn grid_columns(width: u32) -> u8 {
    ViewportTier::from_width(width).grid_columns()
}

/// Grid column classes for all tiers, e.g. `grid-cols-1 md:grid-cols-2 lg:grid-cols-3`
pub fn grid_column_classes() -> String {
    ViewportTier::ALL
        .iter()
        .map(|tier| format!("{}grid-cols-{}", tier.prefix(), tier.grid_columns()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rendered width hint for the hero image at a tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageWidth {
    /// Fraction of the viewport width, in percent
    Viewport(u8),
    /// Fixed pixel width
    Pixels(u32),
}

impl ImageWidth {
    fn css(&self) -> String {
        match self {
            ImageWidth::Viewport(pct) => format!("{}vw", pct),
            ImageWidth::Pixels(px) => format!("{}px", px),
        }
    }
}

/// Hero image fixed height on wide viewports
pub const HERO_IMAGE_WIDE_HEIGHT_PX: u32 = 600;

/// Hero image rendered width on wide viewports
pub const HERO_IMAGE_WIDE_WIDTH_PX: u32 = 600;

/// Hero image width hint at a tier
pub fn hero_image_width(tier: ViewportTier) -> ImageWidth {
    match tier {
        ViewportTier::Narrow => ImageWidth::Viewport(100),
        ViewportTier::Medium => ImageWidth::Viewport(50),
        ViewportTier::Wide => ImageWidth::Pixels(HERO_IMAGE_WIDE_WIDTH_PX),
    }
}

/// `sizes` attribute for the hero image
pub fn hero_image_sizes() -> String {
    format!(
        "(max-width: {}px) {}, (max-width: {}px) {}, {}",
        MEDIUM_MIN_WIDTH,
        hero_image_width(ViewportTier::Narrow).css(),
        WIDE_MIN_WIDTH,
        hero_image_width(ViewportTier::Medium).css(),
        hero_image_width(ViewportTier::Wide).css()
    )
}
