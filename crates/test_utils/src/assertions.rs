//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{GoldWeight, Money};
use domain_gold::PriceQuote;
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value rounds to `expected` at currency precision
pub fn assert_money_rounds_to(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.round_to_currency().amount(),
        expected,
        "Expected {} after rounding, got {}",
        expected,
        actual.amount()
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that two weights are within `tolerance` grams
pub fn assert_grams_approx_eq(actual: &GoldWeight, expected: &GoldWeight, tolerance: Decimal) {
    let diff = (actual.grams() - expected.grams()).abs();
    assert!(
        diff <= tolerance,
        "Weights differ by more than tolerance: actual={}, expected={}, diff={}",
        actual.grams(),
        expected.grams(),
        diff
    );
}

/// Asserts the net/over-discount invariant of a price quote
pub fn assert_quote_consistent(quote: &PriceQuote) {
    let raw = quote.gross_amount.amount()
        + quote.taxes.iter().map(|m| m.amount()).sum::<Decimal>()
        + quote.fees.iter().map(|m| m.amount()).sum::<Decimal>()
        - quote.discounts.iter().map(|m| m.amount()).sum::<Decimal>();

    assert!(
        !quote.net_amount.is_negative(),
        "Net amount is negative: {}",
        quote.net_amount.amount()
    );
    assert_eq!(
        quote.over_discounted,
        raw < Decimal::ZERO,
        "over_discounted={} but raw total is {}",
        quote.over_discounted,
        raw
    );
    assert_eq!(
        quote.net_amount.amount(),
        raw.max(Decimal::ZERO),
        "Net amount does not match its lines"
    );
}
