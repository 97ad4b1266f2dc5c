use leptos::prelude::*;

use crate::core::icons::IconKey;
use crate::ui::icon::Icon;
use crate::ui::theme::use_theme_context;

/// Light/dark switch pinned to the top-right corner.
///
/// Markup does not depend on the theme signal.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="fixed top-4 right-4 z-50 p-3 rounded-full bg-card/80 backdrop-blur-sm border border-border
                   text-foreground shadow-md hover:scale-105 transition-transform"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            // Both glyphs are always rendered; the `dark` class on <html> picks one,
            // so server markup and hydration agree whatever theme is stored
            <Icon icon=IconKey::Sun class="w-5 h-5 hidden dark:block" />
            <Icon icon=IconKey::Moon class="w-5 h-5 block dark:hidden" />
        </button>
    }
}
