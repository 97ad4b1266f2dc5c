use leptos::prelude::*;

use crate::core::catalog::Feature;
use crate::core::motion::{ICON_HOVER, Reveal};
use crate::ui::icon::FeatureIcon;

/// One feature tile. `index` is the card's position in the list; `reveal`
/// carries the entrance staggered by that position.
#[component]
pub fn FeatureCard(feature: Feature, index: usize, reveal: Reveal) -> impl IntoView {
    view! {
        <article
            class="organic-card p-6 lg:p-8 group"
            data-feature-id=feature.id
            data-index=index.to_string()
            data-reveal=reveal.trigger.as_str()
            data-reveal-margin=reveal.margin_attr()
            style=reveal.style()
        >
            <div class="flex items-start gap-4">
                <div
                    class="feature-icon flex-shrink-0 w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center group-hover:bg-primary/20"
                    style=ICON_HOVER.style()
                >
                    <FeatureIcon key=feature.icon />
                </div>

                <div class="flex-1 space-y-2">
                    <h3 class="text-xl font-semibold text-foreground">{feature.title}</h3>
                    <p class="text-muted-foreground leading-relaxed">{feature.description}</p>
                </div>
            </div>
        </article>
    }
}
