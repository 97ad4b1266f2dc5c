//! Wires the cart flag into the component tree.
//!
//! In the browser the revert runs on a `gloo_timers` timeout owned by a
//! [`CartController`]. The controller lives for as long as the reactive owner
//! that created it; cleanup cancels whatever revert is still pending.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::cart::CartSettings;
#[cfg(feature = "hydrate")]
use crate::core::cart::{CartController, Scheduler};

/// Timeout length in whole milliseconds, clamped to what the browser accepts
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Scheduler backed by `setTimeout`
#[cfg(feature = "hydrate")]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(timeout_millis(delay), task)
    }

    fn cancel(&self, handle: Self::Handle) {
        let _ = handle.cancel();
    }
}

/// Build the add-to-cart handler shared by every cart button on the page.
///
/// `is_adding` follows the controller's flag. Every accepted trigger logs
/// the product name.
#[cfg(feature = "hydrate")]
pub fn use_add_to_cart(
    product_name: String,
    settings: CartSettings,
    is_adding: RwSignal<bool>,
) -> Callback<()> {
    let cart = StoredValue::new_local(CartController::new(
        BrowserScheduler,
        settings,
        move |adding| is_adding.set(adding),
        move || leptos::logging::log!("Added to cart: {}", product_name),
    ));

    on_cleanup(move || {
        cart.try_with_value(|c| c.teardown());
    });

    Callback::new(move |_| {
        cart.with_value(|c| {
            c.add_to_cart();
        });
    })
}

/// Server render: there is nothing to click, so the handler only reports misuse
#[cfg(not(feature = "hydrate"))]
pub fn use_add_to_cart(
    product_name: String,
    settings: CartSettings,
    is_adding: RwSignal<bool>,
) -> Callback<()> {
    let _ = (settings, is_adding);
    Callback::new(move |_| {
        leptos::logging::debug_warn!("Add to cart for '{}' outside the browser", product_name);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_millis(1000)), 1000);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_server_handler_leaves_flag_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let is_adding = RwSignal::new(false);
            let on_add = use_add_to_cart("Bag".to_string(), CartSettings::default(), is_adding);
            on_add.run(());
            assert!(!is_adding.get_untracked());
        });
    }
}
