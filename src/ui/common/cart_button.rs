use leptos::prelude::*;

use crate::core::icons::IconKey;
use crate::ui::icon::Icon;

/// Text shown while the simulated add is in flight
pub const ADDING_LABEL: &str = "Adding...";
pub const IDLE_LABEL: &str = "Add to Cart";

/// Label for the current state of the cart flag
pub fn cart_label(is_adding: bool) -> &'static str {
    if is_adding { ADDING_LABEL } else { IDLE_LABEL }
}

/// Add-to-cart button.
///
/// Stays clickable while adding; a repeat click restarts the countdown.
#[component]
pub fn CartButton(
    /// Click handler
    on_add_to_cart: Callback<()>,
    /// Shared "adding to cart" flag
    #[prop(into)]
    is_adding: Signal<bool>,
    /// Accessible name for screen readers
    aria_label: &'static str,
    /// Additional CSS classes
    #[prop(default = "organic-button")]
    class: &'static str,
    #[prop(default = "w-5 h-5")]
    icon_class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            data-cart-button="true"
            aria-label=aria_label
            aria-busy=move || if is_adding.get() { "true" } else { "false" }
            on:click=move |_| on_add_to_cart.run(())
        >
            <span class="inline-flex items-center justify-center gap-2">
                <Icon icon=IconKey::ShoppingCart class=icon_class />
                {move || cart_label(is_adding.get())}
            </span>
        </button>
    }
}
