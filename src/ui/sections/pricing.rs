use leptos::prelude::*;

use crate::core::motion;
use crate::core::pricing::PriceTag;
use crate::core::showcase::TRUST_BADGES;
use crate::ui::common::CartButton;
use crate::ui::icon::Icon;
use crate::ui::reveal::Revealed;

/// Closing purchase card: price, second call to action and trust badges
#[component]
pub fn ProductPricing(
    price: f64,
    currency: String,
    on_add_to_cart: Callback<()>,
    #[prop(into)] is_adding: Signal<bool>,
) -> impl IntoView {
    let tag = PriceTag::new(price, &currency);
    let price_label = tag.label();

    view! {
        <section
            class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 md:py-16"
            aria-labelledby="pricing-heading"
        >
            <Revealed reveal=motion::PRICING_CARD class="max-w-4xl mx-auto">
                <div class="organic-card p-8 lg:p-12 text-center">
                    <h2 id="pricing-heading" class="sr-only">"Purchase Information"</h2>

                    <Revealed reveal=motion::PRICING_AMOUNT class="mb-8">
                        <p class="text-lg text-muted-foreground mb-4">"Investment in Quality"</p>
                        <div class="flex items-baseline justify-center gap-2" role="group" aria-label=price_label>
                            <span class="text-6xl sm:text-7xl font-bold gradient-organic bg-clip-text text-transparent">
                                {tag.amount}
                            </span>
                            <span class="text-2xl text-muted-foreground">{tag.currency}</span>
                        </div>
                    </Revealed>

                    <Revealed reveal=motion::PRICING_BUTTON class="mb-8">
                        <CartButton
                            on_add_to_cart=on_add_to_cart
                            is_adding=is_adding
                            aria_label="Add to cart and begin checkout"
                            class="organic-button text-lg px-12 py-5"
                            icon_class="w-6 h-6"
                        />
                    </Revealed>

                    <Revealed
                        reveal=motion::PRICING_BADGES
                        class="grid grid-cols-1 sm:grid-cols-3 gap-6 pt-8 border-t border-border"
                    >
                        {TRUST_BADGES
                            .iter()
                            .map(|badge| {
                                view! {
                                    <div class="flex flex-col items-center gap-2" data-badge=badge.slug()>
                                        <div class="w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center">
                                            <Icon icon=badge.icon() class="w-6 h-6 text-primary" />
                                        </div>
                                        <p class="text-sm font-medium">{badge.title()}</p>
                                        <p class="text-xs text-muted-foreground">{badge.caption()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Revealed>
                </div>
            </Revealed>
        </section>
    }
}
