//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{GoldWeight, Money, Rate};
use domain_savings::SipPlan;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for positive INR amounts with paise, up to 1 crore
pub fn positive_inr_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(|paise| Money::inr(Decimal::new(paise, 2)))
}

/// Strategy for non-negative INR amounts up to 10 lakh
pub fn non_negative_inr_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000_000i64).prop_map(|paise| Money::inr(Decimal::new(paise, 2)))
}

/// Strategy for realistic per-gram prices between 1000 and 20000
pub fn price_per_gram_strategy() -> impl Strategy<Value = Money> {
    (100_000i64..2_000_000i64).prop_map(|paise| Money::inr(Decimal::new(paise, 2)))
}

/// Strategy for weights up to 1 kg at milligram precision
pub fn weight_strategy() -> impl Strategy<Value = GoldWeight> {
    (0i64..1_000_000i64).prop_map(|mg| GoldWeight::from_grams(Decimal::new(mg, 3)))
}

/// Strategy for annual rates between 0% and 36% in basis points
pub fn annual_rate_strategy() -> impl Strategy<Value = Rate> {
    (0i64..3_600i64).prop_map(|bps| Rate::from_percentage(Decimal::new(bps, 2)))
}

/// Strategy for tenures between one month and 30 years
pub fn tenure_strategy() -> impl Strategy<Value = u32> {
    1u32..=360u32
}

/// Strategy for short lists of fees or discounts
pub fn adjustments_strategy() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(non_negative_inr_strategy(), 0..4)
}

/// Strategy for valid SIP plans
pub fn sip_plan_strategy() -> impl Strategy<Value = SipPlan> {
    (
        positive_inr_strategy(),
        tenure_strategy(),
        annual_rate_strategy(),
    )
        .prop_map(|(contribution, months, rate)| SipPlan::new(contribution, months, rate))
}
