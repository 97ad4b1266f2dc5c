//! Icon keys and their glyph outlines.
//!
//! Feature records name icons by string. [`resolve`] turns any string into a
//! renderable [`IconKey`]; keys outside the known set fall back to
//! [`IconKey::FALLBACK`] so a bad record never breaks the page.
//!
//! Glyphs are 24x24 stroke outlines, drawn with `currentColor`.

use std::fmt;

/// Closed set of renderable icons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKey {
    Award,
    Zap,
    Laptop,
    Move,
    ShieldCheck,
    Scissors,
    Grid,
    CloudRain,
    Sparkles,
    Hand,
    // Page chrome, not addressable from feature records
    ShoppingCart,
    Truck,
    RotateCcw,
    Check,
    Sun,
    Moon,
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys a feature record may use, in lookup order
pub const FEATURE_ICONS: [IconKey; 10] = [
    IconKey::Award,
    IconKey::Zap,
    IconKey::Laptop,
    IconKey::Move,
    IconKey::ShieldCheck,
    IconKey::Scissors,
    IconKey::Grid,
    IconKey::CloudRain,
    IconKey::Sparkles,
    IconKey::Hand,
];

impl IconKey {
    /// Substitute for unknown feature icon keys
    pub const FALLBACK: IconKey = IconKey::Award;

    /// Symbolic key as written in product records
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Award => "award",
            IconKey::Zap => "zap",
            IconKey::Laptop => "laptop",
            IconKey::Move => "move",
            IconKey::ShieldCheck => "shield-check",
            IconKey::Scissors => "scissors",
            IconKey::Grid => "grid",
            IconKey::CloudRain => "cloud-rain",
            IconKey::Sparkles => "sparkles",
            IconKey::Hand => "hand",
            IconKey::ShoppingCart => "shopping-cart",
            IconKey::Truck => "truck",
            IconKey::RotateCcw => "rotate-ccw",
            IconKey::Check => "check",
            IconKey::Sun => "sun",
            IconKey::Moon => "moon",
        }
    }

    /// Parse a feature icon key. Only [`FEATURE_ICONS`] are accepted.
    pub fn from_feature_key(key: &str) -> Option<Self> {
        FEATURE_ICONS.into_iter().find(|icon| icon.as_str() == key)
    }

    /// Stroke paths making up the glyph
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKey::Award => &[
                "m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526",
                "M6 8a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
            ],
            IconKey::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            IconKey::Laptop => &[
                "M5 4h14a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M2 20h20",
            ],
            IconKey::Move => &[
                "M5 9l-3 3 3 3",
                "M9 5l3-3 3 3",
                "M15 19l-3 3-3-3",
                "M19 9l3 3-3 3",
                "M2 12h20",
                "M12 2v20",
            ],
            IconKey::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "m9 12 2 2 4-4",
            ],
            IconKey::Scissors => &[
                "M3 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M20 4 8.12 15.88",
                "M14.47 14.48 20 20",
                "M8.12 8.12 12 12",
            ],
            IconKey::Grid => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M3 15h18",
                "M9 3v18",
                "M15 3v18",
            ],
            IconKey::CloudRain => &[
                "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242",
                "M16 14v6",
                "M8 14v6",
                "M12 16v6",
            ],
            IconKey::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            IconKey::Hand => &[
                "M18 11V6a2 2 0 0 0-2-2a2 2 0 0 0-2 2",
                "M14 10V4a2 2 0 0 0-2-2a2 2 0 0 0-2 2v2",
                "M10 10.5V6a2 2 0 0 0-2-2a2 2 0 0 0-2 2v8",
                "M18 8a2 2 0 1 1 4 0v6a8 8 0 0 1-8 8h-2c-2.8 0-4.5-.86-5.99-2.34l-3.6-3.6a2 2 0 0 1 2.83-2.82L7 15",
            ],
            IconKey::ShoppingCart => &[
                "M7 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M18 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
            ],
            IconKey::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconKey::RotateCcw => &["M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8", "M3 3v5h5"],
            IconKey::Check => &["M20 6 9 17l-5-5"],
            IconKey::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconKey::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        }
    }
}

/// Resolve a feature icon key. Total: unknown keys yield [`IconKey::FALLBACK`].
pub fn resolve(key: &str) -> IconKey {
    IconKey::from_feature_key(key).unwrap_or(IconKey::FALLBACK)
}

/// Whether [`resolve`] would substitute the fallback for this key
pub fn is_fallback(key: &str) -> bool {
    IconKey::from_feature_key(key).is_none()
}
