// Property-based tests for quantity rules

use proptest::prelude::*;
use quote_service::quotes::models::{derive_quantity, QuantityRule};

proptest! {
    #[test]
    fn test_ratio_covers_every_guest(
        guests in 0u32..=100_000,
        divisor in 1u32..=500
    ) {
        let quantity = derive_quantity(Some(&QuantityRule::Ratio { divisor }), guests);

        // Enough units for all guests, and one fewer would not be
        prop_assert!(u64::from(quantity) * u64::from(divisor) >= u64::from(guests));
        if quantity > 0 {
            prop_assert!(u64::from(quantity - 1) * u64::from(divisor) < u64::from(guests));
        }
    }

    #[test]
    fn test_fixed_is_constant(guests in 0u32..=100_000, value in 0u32..=1000) {
        prop_assert_eq!(derive_quantity(Some(&QuantityRule::Fixed { value }), guests), value);
    }

    #[test]
    fn test_range_is_value_or_zero(
        guests in 0u32..=1000,
        min in 0u32..=500,
        width in 0u32..=500,
        value in 1u32..=10
    ) {
        let max = min + width;
        let quantity = derive_quantity(Some(&QuantityRule::Range { min, max, value }), guests);

        if guests >= min && guests <= max {
            prop_assert_eq!(quantity, value);
        } else {
            prop_assert_eq!(quantity, 0);
        }
    }

    #[test]
    fn test_no_rule_is_one(guests in 0u32..=100_000) {
        prop_assert_eq!(derive_quantity(None, guests), 1);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(derive_quantity(Some(&QuantityRule::Ratio { divisor: 15 }), 100), 7);
    assert_eq!(
        derive_quantity(Some(&QuantityRule::Range { min: 50, max: 100, value: 2 }), 30),
        0
    );
    assert_eq!(derive_quantity(Some(&QuantityRule::Fixed { value: 1 }), 12_345), 1);
}
