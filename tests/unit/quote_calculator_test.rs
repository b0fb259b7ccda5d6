// Property-based tests for quote pricing
//
// Properties tested:
// 1. line_total = quantity × unit_price for non-negative inputs
// 2. total = subtotal + tax exactly
// 3. tax = subtotal × 16% up to one cent
// 4. subtotal = Σ line totals

use proptest::prelude::*;
use quote_service::core::Currency;
use quote_service::quotes::services::{QuoteCalculator, TAX_RATE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn calculator() -> QuoteCalculator {
    QuoteCalculator::new(Currency::MXN)
}

fn price_from_cents(cents: u64) -> Decimal {
    Decimal::new(cents as i64, 2)
}

proptest! {
    #[test]
    fn test_line_total_is_product(
        quantity in 0i64..=10_000,
        cents in 0u64..=10_000_000u64
    ) {
        let unit_price = price_from_cents(cents);
        let total = calculator().line_total(quantity, unit_price).unwrap();

        prop_assert_eq!(total, Decimal::from(quantity) * unit_price,
            "quantity={}, unit_price={}", quantity, unit_price);
    }

    #[test]
    fn test_total_is_subtotal_plus_tax(
        lines in prop::collection::vec((0i64..=500, 0u64..=5_000_000u64), 0..40)
    ) {
        let calc = calculator();
        let line_totals: Vec<Decimal> = lines
            .iter()
            .map(|(q, cents)| calc.line_total(*q, price_from_cents(*cents)).unwrap())
            .collect();

        let totals = calc.quote_totals(line_totals.iter()).unwrap();

        prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
        prop_assert_eq!(totals.subtotal, line_totals.iter().copied().sum::<Decimal>());
    }

    #[test]
    fn test_total_is_subtotal_times_one_sixteen(
        lines in prop::collection::vec((0i64..=500, 0u64..=5_000_000u64), 0..40)
    ) {
        let calc = calculator();
        let line_totals: Vec<Decimal> = lines
            .iter()
            .map(|(q, cents)| calc.line_total(*q, price_from_cents(*cents)).unwrap())
            .collect();

        let totals = calc.quote_totals(line_totals.iter()).unwrap();
        let exact = totals.subtotal * (Decimal::ONE + TAX_RATE);

        prop_assert!((totals.total - exact).abs() <= dec!(0.005),
            "total {} too far from {}", totals.total, exact);
    }

    #[test]
    fn test_per_person_times_guests_close_to_total(
        cents in 0u64..=100_000_000u64,
        guests in 1u32..=2000
    ) {
        let calc = calculator();
        let line = [price_from_cents(cents)];
        let totals = calc.quote_totals(line.iter()).unwrap();

        let per_person = calc.per_person(&totals, guests).unwrap();
        let spread = (per_person * Decimal::from(guests) - totals.total).abs();

        prop_assert!(spread <= dec!(0.005) * Decimal::from(guests));
    }
}

#[test]
fn test_end_to_end_example() {
    let calc = calculator();
    let lines = [
        calc.line_total(2, dec!(100)).unwrap(),
        calc.line_total(1, dec!(50)).unwrap(),
    ];
    let totals = calc.quote_totals(lines.iter()).unwrap();

    assert_eq!(totals.subtotal, dec!(250));
    assert_eq!(totals.tax, dec!(40));
    assert_eq!(totals.total, dec!(290));
}

#[test]
fn test_fractional_tax_rounds_to_cents() {
    let calc = calculator();
    let lines = [calc.line_total(1, dec!(10.03)).unwrap()];
    let totals = calc.quote_totals(lines.iter()).unwrap();

    // 10.03 × 0.16 = 1.6048
    assert_eq!(totals.tax, dec!(1.60));
    assert_eq!(totals.total, dec!(11.63));
}

#[test]
fn test_totals_past_decimal_range_are_errors() {
    let calc = calculator();
    assert!(calc.line_total(3, Decimal::MAX / dec!(2)).is_err());

    let lines = [Decimal::MAX / dec!(2), Decimal::MAX / dec!(2), dec!(1)];
    assert!(calc.quote_totals(lines.iter()).is_err());
}
