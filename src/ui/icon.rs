use leptos::prelude::*;

use crate::core::icons::{self, IconKey};

/// Inline stroke icon
#[component]
pub fn Icon(
    /// Glyph to draw
    icon: IconKey,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-icon=icon.as_str()
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Icon for a feature record key. Unknown keys draw the fallback glyph.
#[component]
pub fn FeatureIcon(
    /// Symbolic key from the product record
    key: String,
    #[prop(default = "w-6 h-6 text-primary")]
    class: &'static str,
) -> impl IntoView {
    if icons::is_fallback(&key) {
        leptos::logging::debug_warn!(
            "Unknown icon key '{}', drawing '{}' instead",
            key,
            IconKey::FALLBACK
        );
    }

    view! { <Icon icon=icons::resolve(&key) class=class /> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(view: impl FnOnce() -> String) -> String {
        let owner = Owner::new();
        owner.with(view)
    }

    #[test]
    fn test_icon_renders_all_paths() {
        let html = render(|| view! { <Icon icon=IconKey::Move /> }.to_html());
        assert!(html.contains(r#"data-icon="move""#));
        assert_eq!(html.matches("<path").count(), IconKey::Move.paths().len());
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_feature_icon_falls_back() {
        let html = render(|| {
            view! { <FeatureIcon key="definitely-not-an-icon".to_string() /> }.to_html()
        });
        assert!(html.contains(r#"data-icon="award""#));
    }

    #[test]
    fn test_feature_icon_known_key() {
        let html = render(|| view! { <FeatureIcon key="cloud-rain".to_string() /> }.to_html());
        assert!(html.contains(r#"data-icon="cloud-rain""#));
    }
}
