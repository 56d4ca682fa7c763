//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{GoldWeight, Money, Rate};
use domain_loan::LoanTerms;
use domain_savings::{Goal, SipPlan};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{MoneyFixtures, PriceFixtures, TemporalFixtures, WeightFixtures};

/// Builder for loan terms
pub struct LoanTermsBuilder {
    pledged_grams: GoldWeight,
    price_per_gram: Money,
    ltv_percent: Decimal,
    rate_percent: Decimal,
    tenure_months: u32,
}

impl Default for LoanTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanTermsBuilder {
    /// 10 g valued at 6000/g, 75% LTV, 9.5% over 12 months
    pub fn new() -> Self {
        Self {
            pledged_grams: WeightFixtures::ten_grams(),
            price_per_gram: PriceFixtures::sell_per_gram(),
            ltv_percent: dec!(75),
            rate_percent: dec!(9.5),
            tenure_months: 12,
        }
    }

    pub fn with_grams(mut self, grams: Decimal) -> Self {
        self.pledged_grams = GoldWeight::from_grams(grams);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price_per_gram = Money::inr(price);
        self
    }

    pub fn with_ltv(mut self, percent: Decimal) -> Self {
        self.ltv_percent = percent;
        self
    }

    pub fn with_rate(mut self, percent: Decimal) -> Self {
        self.rate_percent = percent;
        self
    }

    pub fn with_tenure(mut self, months: u32) -> Self {
        self.tenure_months = months;
        self
    }

    pub fn build(self) -> LoanTerms {
        LoanTerms::new(
            self.pledged_grams,
            self.price_per_gram,
            Rate::from_percentage(self.ltv_percent),
            Rate::from_percentage(self.rate_percent),
            self.tenure_months,
        )
    }
}

/// Builder for SIP plans
pub struct SipPlanBuilder {
    contribution: Money,
    months: u32,
    rate_percent: Decimal,
}

impl Default for SipPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SipPlanBuilder {
    /// 5000 a month for a year at 12%
    pub fn new() -> Self {
        Self {
            contribution: MoneyFixtures::inr_sip_contribution(),
            months: 12,
            rate_percent: dec!(12),
        }
    }

    pub fn with_contribution(mut self, amount: Decimal) -> Self {
        self.contribution = Money::inr(amount);
        self
    }

    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub fn with_rate(mut self, percent: Decimal) -> Self {
        self.rate_percent = percent;
        self
    }

    pub fn build(self) -> SipPlan {
        SipPlan::new(
            self.contribution,
            self.months,
            Rate::from_percentage(self.rate_percent),
        )
    }
}

/// Builder for savings goals
pub struct GoalBuilder {
    target_amount: Money,
    current_amount: Money,
    target_grams: GoldWeight,
    current_grams: GoldWeight,
    deadline: NaiveDate,
}

impl Default for GoalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalBuilder {
    /// One lakh by year end, nothing saved, no weight target
    pub fn new() -> Self {
        Self {
            target_amount: MoneyFixtures::inr_lakh(),
            current_amount: MoneyFixtures::inr_zero(),
            target_grams: GoldWeight::zero(),
            current_grams: GoldWeight::zero(),
            deadline: TemporalFixtures::year_end(),
        }
    }

    pub fn with_target(mut self, amount: Decimal) -> Self {
        self.target_amount = Money::inr(amount);
        self
    }

    pub fn with_saved(mut self, amount: Decimal) -> Self {
        self.current_amount = Money::inr(amount);
        self
    }

    pub fn with_grams(mut self, current: Decimal, target: Decimal) -> Self {
        self.current_grams = GoldWeight::from_grams(current);
        self.target_grams = GoldWeight::from_grams(target);
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn build(self) -> Goal {
        Goal {
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            target_grams: self.target_grams,
            current_grams: self.current_grams,
            deadline: self.deadline,
        }
    }
}
