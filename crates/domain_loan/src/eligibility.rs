//! Loan eligibility against pledged gold

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{GoldWeight, InvalidInputError, Money, Rate};
use domain_gold::to_amount;

/// Highest loan-to-value percentage accepted
pub const MAX_LTV_PERCENT: Decimal = dec!(100);

/// Terms of a gold loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Gold pledged as collateral
    pub pledged_grams: GoldWeight,
    /// Valuation price per gram
    pub price_per_gram: Money,
    /// Loan-to-value ratio (e.g., 75%)
    pub ltv_ratio: Rate,
    /// Annual interest rate
    pub annual_rate: Rate,
    /// Tenure in months
    pub tenure_months: u32,
}

impl LoanTerms {
    /// Creates loan terms
    ///
    /// # Arguments
    ///
    /// * `pledged_grams` - Weight of the pledged gold
    /// * `price_per_gram` - Price used to value the gold
    /// * `ltv_ratio` - Share of the value advanced
    /// * `annual_rate` - Annual interest rate
    /// * `tenure_months` - Repayment period
    pub fn new(
        pledged_grams: GoldWeight,
        price_per_gram: Money,
        ltv_ratio: Rate,
        annual_rate: Rate,
        tenure_months: u32,
    ) -> Self {
        Self {
            pledged_grams,
            price_per_gram,
            ltv_ratio,
            annual_rate,
            tenure_months,
        }
    }
}

/// How much can be borrowed against the pledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanEligibility {
    /// Market value of the pledged gold
    pub collateral_value: Money,
    /// Amount that may be advanced
    pub eligible_amount: Money,
    /// True when `max_loan_amount` reduced the amount
    pub capped: bool,
}

/// Computes the eligible loan amount
///
/// `eligible = min(pledged_grams × price_per_gram × ltv, max_loan_amount)`
pub fn compute_eligibility(
    terms: &LoanTerms,
    max_loan_amount: Option<Money>,
) -> Result<LoanEligibility, InvalidInputError> {
    let ltv = terms
        .ltv_ratio
        .ensure_within("ltv_ratio", Decimal::ZERO, MAX_LTV_PERCENT)?;

    let collateral_value = to_amount(terms.pledged_grams, terms.price_per_gram)?;
    let raw_amount = ltv.apply(&collateral_value)?;

    let (eligible_amount, capped) = match max_loan_amount {
        Some(max) => {
            let max = max.ensure_non_negative("max_loan_amount")?;
            raw_amount.ensure_same_currency(&max)?;
            if raw_amount.amount() > max.amount() {
                (max, true)
            } else {
                (raw_amount, false)
            }
        }
        None => (raw_amount, false),
    };

    Ok(LoanEligibility {
        collateral_value,
        eligible_amount,
        capped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(grams: Decimal, price: Decimal, ltv: Decimal) -> LoanTerms {
        LoanTerms::new(
            GoldWeight::from_grams(grams),
            Money::inr(price),
            Rate::from_percentage(ltv),
            Rate::from_percentage(dec!(9.5)),
            12,
        )
    }

    #[test]
    fn test_cap_applied() {
        let result = compute_eligibility(
            &terms(dec!(10), dec!(6000), dec!(75)),
            Some(Money::inr(dec!(30000))),
        )
        .unwrap();

        assert_eq!(result.collateral_value.amount(), dec!(60000));
        assert_eq!(result.eligible_amount.amount(), dec!(30000));
        assert!(result.capped);
    }

    #[test]
    fn test_cap_not_reached() {
        let result = compute_eligibility(
            &terms(dec!(10), dec!(6000), dec!(75)),
            Some(Money::inr(dec!(100000))),
        )
        .unwrap();

        assert_eq!(result.eligible_amount.amount(), dec!(45000));
        assert!(!result.capped);
    }

    #[test]
    fn test_no_cap() {
        let result = compute_eligibility(&terms(dec!(4), dec!(6500), dec!(80)), None).unwrap();
        assert_eq!(result.eligible_amount.amount(), dec!(20800));
    }

    #[test]
    fn test_ltv_above_hundred_rejected() {
        let result = compute_eligibility(&terms(dec!(10), dec!(6000), dec!(110)), None);
        assert!(matches!(result, Err(InvalidInputError::RateOutOfRange { .. })));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = compute_eligibility(&terms(dec!(-1), dec!(6000), dec!(75)), None);
        assert!(matches!(result, Err(InvalidInputError::NegativeAmount { .. })));
    }
}
