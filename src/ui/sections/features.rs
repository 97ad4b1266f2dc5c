use leptos::prelude::*;

use crate::core::catalog::Feature;
use crate::core::layout::grid_column_classes;
use crate::core::motion;
use crate::core::showcase::{FEATURES_HEADING, FEATURES_INTRO, card_plans};
use crate::ui::reveal::Revealed;
use crate::ui::sections::FeatureCard;

/// Heading block plus a responsive grid with one card per feature, in order
#[component]
pub fn ProductFeatures(features: Vec<Feature>) -> impl IntoView {
    let grid_class = format!("grid {} gap-6 md:gap-8", grid_column_classes());

    view! {
        <section
            class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 md:py-16 lg:py-20"
            aria-labelledby="features-heading"
        >
            <Revealed reveal=motion::FEATURES_HEADING class="text-center mb-12 lg:mb-16">
                <h2
                    id="features-heading"
                    class="font-display text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4"
                >
                    {FEATURES_HEADING}
                </h2>
                <p class="text-lg sm:text-xl text-muted-foreground max-w-2xl mx-auto">
                    {FEATURES_INTRO}
                </p>
            </Revealed>

            <div class=grid_class>
                {card_plans(&features)
                    .into_iter()
                    .map(|plan| {
                        view! {
                            <FeatureCard
                                feature=plan.feature.clone()
                                index=plan.index
                                reveal=plan.reveal
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
