//! Pre-built Test Fixtures
//!
//! Provides ready-to-use prices, amounts and dates. Values are fixed so
//! expected results can be worked out by hand.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{Currency, FixedClock, GoldPrice, GoldWeight, Money, StaticPriceSource};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// One lakh rupees
    pub fn inr_lakh() -> Money {
        Money::inr(dec!(100000))
    }

    /// A typical monthly SIP contribution
    pub fn inr_sip_contribution() -> Money {
        Money::inr(dec!(5000))
    }

    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100), Currency::USD)
    }
}

/// Fixture for gold prices
pub struct PriceFixtures;

impl PriceFixtures {
    /// Buy price per gram; divides evenly into round amounts
    pub fn buy_per_gram() -> Money {
        Money::inr(dec!(6250))
    }

    /// Sell price per gram
    pub fn sell_per_gram() -> Money {
        Money::inr(dec!(6000))
    }

    /// Quote taken at [`TemporalFixtures::now`]
    pub fn gold_price() -> GoldPrice {
        GoldPrice::new(
            Self::buy_per_gram(),
            Self::sell_per_gram(),
            TemporalFixtures::now(),
        )
    }

    /// Price source returning [`PriceFixtures::gold_price`]
    pub fn static_source() -> StaticPriceSource {
        StaticPriceSource::new(Self::gold_price())
    }
}

/// Fixture for gold weights
pub struct WeightFixtures;

impl WeightFixtures {
    pub fn ten_grams() -> GoldWeight {
        GoldWeight::from_grams(dec!(10))
    }

    pub fn one_gram() -> GoldWeight {
        GoldWeight::from_grams(dec!(1))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference instant (Jun 15, 2024 09:30 UTC)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
    }

    /// Clock pinned to [`TemporalFixtures::now`]
    pub fn clock() -> FixedClock {
        FixedClock(Self::now())
    }

    /// Goal deadline at the end of the year
    pub fn year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// A deadline already passed
    pub fn last_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }
}
