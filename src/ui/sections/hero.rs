use leptos::prelude::*;

use crate::core::icons::IconKey;
use crate::core::layout::hero_image_sizes;
use crate::core::motion::{self, HeroStep};
use crate::core::pricing::PriceTag;
use crate::core::showcase::{HERO_IMAGE_ALT, HERO_IMAGE_SRC, HERO_TRUST_POINTS, SHIPPING_NOTE};
use crate::ui::common::CartButton;
use crate::ui::icon::Icon;
use crate::ui::reveal::Revealed;

/// Image, name, benefit, price and the primary call to action
#[component]
pub fn ProductHero(
    name: String,
    benefit: String,
    price: f64,
    currency: String,
    on_add_to_cart: Callback<()>,
    #[prop(into)] is_adding: Signal<bool>,
) -> impl IntoView {
    let tag = PriceTag::new(price, &currency);
    let price_label = tag.label();

    view! {
        <section class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 md:py-16 lg:py-24">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-16 items-center">
                <Revealed
                    reveal=motion::HERO_IMAGE
                    class="relative w-full aspect-square lg:aspect-auto lg:h-[600px]"
                >
                    <div class="relative w-full h-full rounded-xl lg:rounded-[3rem] overflow-hidden shadow-xl">
                        <img
                            src=HERO_IMAGE_SRC
                            alt=HERO_IMAGE_ALT
                            sizes=hero_image_sizes()
                            fetchpriority="high"
                            class="absolute inset-0 w-full h-full object-cover"
                        />
                    </div>
                    <div
                        class="absolute -z-10 -inset-4 rounded-[3rem] opacity-20 blur-2xl bg-gradient-to-br from-primary to-accent"
                        aria-hidden="true"
                    ></div>
                </Revealed>

                <Revealed reveal=motion::HERO_DETAILS class="space-y-6 lg:sticky lg:top-24">
                    <div class="space-y-4">
                        <Revealed reveal=HeroStep::Name.reveal()>
                            <h1 class="font-display text-4xl sm:text-5xl lg:text-6xl font-bold tracking-tight text-foreground">
                                {name}
                            </h1>
                        </Revealed>
                        <Revealed reveal=HeroStep::Benefit.reveal()>
                            <p class="text-xl sm:text-2xl text-muted-foreground">{benefit}</p>
                        </Revealed>
                    </div>

                    <Revealed reveal=HeroStep::Price.reveal() class="pt-4">
                        <div class="flex items-baseline gap-2" role="group" aria-label=price_label>
                            <span class="text-5xl sm:text-6xl font-bold text-foreground">
                                {tag.amount}
                            </span>
                            <span class="text-xl text-muted-foreground">{tag.currency}</span>
                        </div>
                    </Revealed>

                    <Revealed reveal=HeroStep::CallToAction.reveal() class="pt-6">
                        <CartButton
                            on_add_to_cart=on_add_to_cart
                            is_adding=is_adding
                            aria_label="Add premium leather messenger bag to cart"
                            class="organic-button w-full sm:w-auto"
                        />
                        <p class="mt-4 text-sm text-muted-foreground">{SHIPPING_NOTE}</p>
                    </Revealed>

                    <Revealed
                        reveal=HeroStep::TrustPoints.reveal()
                        class="pt-6 space-y-3 border-t border-border"
                    >
                        {HERO_TRUST_POINTS
                            .iter()
                            .map(|point| {
                                view! {
                                    <div class="flex items-center gap-3 text-sm">
                                        <Icon icon=IconKey::Check class="w-5 h-5 text-primary" />
                                        <span>{*point}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Revealed>
                </Revealed>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::layout::HERO_IMAGE_WIDE_HEIGHT_PX;

    fn render(price: f64, currency: &str) -> String {
        let owner = Owner::new();
        let currency = currency.to_string();
        owner.with(|| {
            view! {
                <ProductHero
                    name="Satchel".to_string()
                    benefit="Carries things.".to_string()
                    price=price
                    currency=currency
                    on_add_to_cart=Callback::new(|_| {})
                    is_adding=Signal::stored(false)
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_hero_content() {
        let html = render(1297.0, "USD");
        assert!(html.contains("Satchel"));
        assert!(html.contains("Carries things."));
        assert!(html.contains("$1,297"));
        assert!(html.contains(r#"role="group" aria-label="$1,297 USD""#));
        assert!(html.contains("Handcrafted in small batches of 50"));
        assert!(html.contains(r#"sizes="(max-width: 768px) 100vw, (max-width: 1024px) 50vw, 600px""#));
    }

    #[test]
    fn test_wide_image_box_matches_height_hint() {
        let html = render(1297.0, "USD");
        assert!(html.contains(&format!("lg:h-[{}px]", HERO_IMAGE_WIDE_HEIGHT_PX)));
    }

    #[test]
    fn test_hero_step_delays_in_reading_order() {
        let html = render(1297.0, "USD");
        let positions: Vec<usize> = ["300ms", "400ms", "500ms", "600ms", "700ms"]
            .iter()
            .map(|d| html.find(&format!("transition-delay:{}", d)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_currency_shown_verbatim() {
        let html = render(5.5, "xyz");
        assert!(html.contains("$5.5"));
        assert!(html.contains("xyz"));
    }
}
