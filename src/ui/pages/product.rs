//! The product page: one shared cart flag feeding both calls to action, plus
//! the reveal script for the elements it mounts

use leptos::prelude::*;

use crate::core::cart::CartSettings;
use crate::core::catalog::Product;
use crate::ui::cart::use_add_to_cart;
use crate::ui::reveal::RevealScript;
use crate::ui::sections::{OrganicBlobs, ProductFeatures, ProductHero, ProductPricing};

/// Hero, feature grid and pricing for `product`, over the background blobs
#[component]
pub fn ProductPage(
    product: Product,
    #[prop(optional)] settings: CartSettings,
) -> impl IntoView {
    let is_adding = RwSignal::new(false);
    let on_add_to_cart = use_add_to_cart(product.name.clone(), settings, is_adding);

    let Product {
        name,
        benefit,
        price,
        currency,
        features,
    } = product;

    view! {
        <main class="relative">
            <OrganicBlobs />

            <div class="relative z-10">
                <ProductHero
                    name=name
                    benefit=benefit
                    price=price
                    currency=currency.clone()
                    on_add_to_cart=on_add_to_cart
                    is_adding=is_adding
                />

                <ProductFeatures features=features />

                <ProductPricing
                    price=price
                    currency=currency
                    on_add_to_cart=on_add_to_cart
                    is_adding=is_adding
                />
            </div>

            <RevealScript />
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::catalog::{Feature, product};

    fn render(product: Product) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <ProductPage product=product /> }.to_html())
    }

    #[test]
    fn test_canonical_page_structure() {
        let html = render(product().clone());

        let mut last = 0;
        for k in 1..=10 {
            let at = html
                .find(&format!(r#"data-feature-id="feature-{}""#, k))
                .unwrap();
            assert!(at > last);
            last = at;
        }
        assert_eq!(html.matches("<article").count(), 10);
        // Amount span plus aria-label, in both hero and pricing
        assert_eq!(html.matches("$1,297").count(), 4);
        assert_eq!(html.matches(r#"aria-label="$1,297 USD""#).count(), 2);
        assert!(html.contains("USD"));
        assert_eq!(html.matches("data-badge=").count(), 3);
        assert_eq!(html.matches("data-cart-button").count(), 2);
        assert_eq!(html.matches(r#"aria-busy="false""#).count(), 2);
    }

    #[test]
    fn test_page_carries_its_own_reveal_script() {
        let html = render(product().clone());

        let script = html.find("IntersectionObserver").unwrap();
        let last_reveal = html.rfind("data-reveal=").unwrap();
        assert!(last_reveal < script);
    }

    #[test]
    fn test_page_without_features() {
        let html = render(Product::new("Tote", "Holds things.", 80.0, "EUR"));
        assert_eq!(html.matches("<article").count(), 0);
        assert!(html.contains("Crafted for a Lifetime"));
        assert_eq!(html.matches(r#"aria-label="$80 EUR""#).count(), 2);
    }

    #[test]
    fn test_single_feature_with_unknown_icon() {
        let html = render(
            Product::new("Tote", "Holds things.", 80.0, "EUR")
                .with_feature(Feature::new("only", "Only", "The one.", "mystery")),
        );
        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains(r#"data-icon="award""#));
    }
}
