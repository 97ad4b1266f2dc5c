use leptos::prelude::*;

use crate::core::catalog::product;
use crate::ui::pages::ProductPage;
use crate::ui::seo::SeoMeta;

/// Root route: the canonical product with its head metadata
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta product=product().clone() />
        <ProductPage product=product().clone() />
    }
}
