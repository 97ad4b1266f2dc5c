#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::{
        CartController, CartSettings, IconKey, PriceTag, TRUST_BADGES, ViewportTier,
        card_plans, grid_columns, product, resolve, stagger_delay,
    };
    use crate::core::cart::manual::ManualScheduler;

    #[test]
    fn test_canonical_page_has_ten_cards_in_id_order() {
        let plans = card_plans(&product().features);

        assert_eq!(plans.len(), 10);
        for (k, plan) in plans.iter().enumerate() {
            assert_eq!(plan.feature.id, format!("feature-{}", k + 1));
            assert_eq!(plan.index, k);
        }
    }

    #[test]
    fn test_canonical_card_delays_follow_position() {
        for (k, plan) in card_plans(&product().features).iter().enumerate() {
            assert_eq!(plan.reveal.delay, stagger_delay(k));
            assert_eq!(plan.reveal.delay, Duration::from_millis(100 * k as u64));
        }
    }

    #[test]
    fn test_canonical_icons() {
        let icons: Vec<IconKey> = card_plans(&product().features)
            .iter()
            .map(|p| p.icon)
            .collect();
        assert_eq!(icons[0], IconKey::Award);
        assert_eq!(icons[4], IconKey::ShieldCheck);
        assert_eq!(icons[9], IconKey::Hand);
    }

    #[test]
    fn test_hero_and_pricing_show_same_price() {
        let hero = PriceTag::from(product());
        let pricing = PriceTag::new(product().price, &product().currency);

        assert_eq!(hero.label(), "$1,297 USD");
        assert_eq!(hero, pricing);
        assert_eq!(TRUST_BADGES.len(), 3);
    }

    #[test]
    fn test_grid_columns_by_viewport_width() {
        assert_eq!(grid_columns(500), 1);
        assert_eq!(grid_columns(900), 2);
        assert_eq!(grid_columns(1280), 3);
        assert_eq!(ViewportTier::from_width(900).grid_columns(), 2);
    }

    #[test]
    fn test_resolve_is_total() {
        let inputs = ["award", "", "AWARD", "unknown-key", "hand", "\u{0}"];
        for input in inputs {
            let icon = resolve(input);
            assert!(!icon.paths().is_empty());
        }
    }

    #[test]
    fn test_add_to_cart_cycle_with_product_name() {
        let scheduler = ManualScheduler::new();
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = log.clone();
        let name = product().name.clone();

        let cart = CartController::new(
            scheduler.clone(),
            CartSettings::default(),
            |_| {},
            move || sink.borrow_mut().push(format!("Added to cart: {}", name)),
        );

        cart.add_to_cart();
        assert!(cart.is_adding());
        assert_eq!(log.borrow().len(), 1);
        scheduler.advance(Duration::from_millis(1000));
        assert!(!cart.is_adding());
        assert_eq!(
            *log.borrow(),
            vec!["Added to cart: Premium Leather Messenger Bag".to_string()]
        );
    }
}
