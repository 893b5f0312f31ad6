//! Tests for Money and Rate arithmetic

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_mean_of_single_amount_is_that_amount() {
    let m = Money::new(dec!(42.50));
    assert_eq!(Money::mean([m]), m);
}

#[test]
fn test_checked_add() {
    let a = Money::new(dec!(0.10));
    let b = Money::new(dec!(0.20));
    assert_eq!(a.checked_add(&b), Ok(Money::new(dec!(0.30))));
}

#[test]
fn test_divide_by_zero_is_an_error() {
    let m = Money::new(dec!(100));
    assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
}

#[test]
fn test_rate_display() {
    let rate = Rate::from_counts(1, 3);
    assert_eq!(rate.to_string(), "33.3%");
}

#[test]
fn test_money_display() {
    assert_eq!(Money::new(dec!(1000)).to_string(), "$1000.00");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mean_is_bounded_by_min_and_max(
            amounts in prop::collection::vec(0i64..10_000_000i64, 1..50)
        ) {
            let monies: Vec<Money> = amounts.iter().map(|&c| Money::from_minor(c)).collect();
            let mean = Money::mean(monies.iter().copied());

            let min = monies.iter().min().unwrap();
            let max = monies.iter().max().unwrap();
            prop_assert!(mean >= *min && mean <= *max);
        }

        #[test]
        fn rate_percentage_is_within_bounds(part in 0u64..1000, extra in 0u64..1000) {
            let total = part + extra;
            let pct = Rate::from_counts(part, total).as_percentage();
            prop_assert!(pct >= Decimal::ZERO && pct <= dec!(100));
        }
    }
}
