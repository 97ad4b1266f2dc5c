//! Web fonts and the CSS variables that name them.
//!
//! Body text uses Inter through `--font-inter`; headings use Plus Jakarta
//! Sans through `--font-jakarta`. The Tailwind config maps `font-sans` and
//! `font-display` onto those variables.

use leptos::prelude::*;
use leptos_meta::{Link, Style};

/// One family exposed as a CSS custom property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontToken {
    pub family: &'static str,
    pub variable: &'static str,
    /// Google Fonts weight axis, e.g. `400;500;600;700`
    pub weights: &'static str,
    pub fallback: &'static str,
}

pub const SANS: FontToken = FontToken {
    family: "Inter",
    variable: "--font-inter",
    weights: "400;500;600;700",
    fallback: "system-ui, -apple-system, sans-serif",
};

pub const DISPLAY: FontToken = FontToken {
    family: "Plus Jakarta Sans",
    variable: "--font-jakarta",
    weights: "500;600;700;800",
    fallback: "system-ui, sans-serif",
};

pub const FONTS: [FontToken; 2] = [SANS, DISPLAY];

impl FontToken {
    /// `--font-inter: 'Inter', system-ui, ...;`
    pub fn declaration(&self) -> String {
        format!("{}: '{}', {};", self.variable, self.family, self.fallback)
    }

    fn query(&self) -> String {
        format!(
            "family={}:wght@{}",
            self.family.replace(' ', "+"),
            self.weights
        )
    }
}

/// `:root` block declaring every font variable
pub fn font_variables_css() -> String {
    let body = FONTS
        .iter()
        .map(|f| f.declaration())
        .collect::<Vec<_>>()
        .join(" ");
    format!(":root {{ {} }}", body)
}

/// Stylesheet URL for all families, with `font-display: swap`
pub fn google_fonts_href() -> String {
    let families = FONTS
        .iter()
        .map(|f| f.query())
        .collect::<Vec<_>>()
        .join("&");
    format!("https://fonts.googleapis.com/css2?{}&display=swap", families)
}

/// Registers font links and variables in `<head>`
#[component]
pub fn FontFaces() -> impl IntoView {
    view! {
        <Link rel="preconnect" href="https://fonts.googleapis.com" />
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
        <Link rel="stylesheet" href=google_fonts_href() />
        <Style>{font_variables_css()}</Style>
    }
}
