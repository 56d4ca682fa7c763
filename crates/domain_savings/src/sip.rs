//! Systematic investment plan projections

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use core_kernel::{GoldWeight, InvalidInputError, Money, Rate};
use domain_gold::to_grams;

/// A recurring monthly investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipPlan {
    /// Amount invested at the start of each month
    pub monthly_contribution: Money,
    /// Number of contributions
    pub duration_months: u32,
    /// Expected annual return
    pub annual_return_rate: Rate,
}

impl SipPlan {
    /// Creates a plan
    pub fn new(monthly_contribution: Money, duration_months: u32, annual_return_rate: Rate) -> Self {
        Self {
            monthly_contribution,
            duration_months,
            annual_return_rate,
        }
    }

    /// Sum of all contributions
    pub fn total_invested(&self) -> Result<Money, InvalidInputError> {
        self.monthly_contribution
            .multiply(Decimal::from(self.duration_months))
    }
}

/// Projected outcome of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipProjection {
    pub total_invested: Money,
    /// `total_value - total_invested`
    pub estimated_returns: Money,
    /// Future value at the end of the plan
    pub total_value: Money,
}

impl SipProjection {
    /// Weight of gold the projected value buys at `price_per_gram`
    pub fn grams_at(&self, price_per_gram: Money) -> Result<GoldWeight, InvalidInputError> {
        to_grams(self.total_value, price_per_gram)
    }
}

/// `((1 + r)^n - 1) / r × (1 + r)`, or `n` when `r` is zero
fn annuity_due_factor(monthly_rate: Decimal, months: u32) -> Result<Decimal, InvalidInputError> {
    if monthly_rate.is_zero() {
        return Ok(Decimal::from(months));
    }

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(months))
        .ok_or(InvalidInputError::overflow("sip growth factor"))?;

    (growth - Decimal::ONE)
        .checked_div(monthly_rate)
        .and_then(|factor| factor.checked_mul(Decimal::ONE + monthly_rate))
        .ok_or(InvalidInputError::overflow("sip annuity factor"))
}

fn validate_terms(months: u32, annual_rate: Rate) -> Result<(), InvalidInputError> {
    InvalidInputError::ensure_term_months("duration_months", months)?;
    annual_rate.ensure_non_negative("annual_return_rate")?;
    Ok(())
}

/// Projects the future value of a plan
///
/// Contributions are made at the start of each month (annuity due):
/// `FV = C × ((1 + r)^n − 1) / r × (1 + r)` with `r = annual / 12`.
/// A zero rate gives `C × n`.
///
/// # Example
///
/// ```rust
/// use core_kernel::{Money, Rate};
/// use domain_savings::{project_future_value, SipPlan};
/// use rust_decimal_macros::dec;
///
/// let plan = SipPlan::new(Money::inr(dec!(1000)), 10, Rate::zero());
/// let projection = project_future_value(&plan).unwrap();
/// assert_eq!(projection.total_value.amount(), dec!(10000));
/// ```
pub fn project_future_value(plan: &SipPlan) -> Result<SipProjection, InvalidInputError> {
    validate_terms(plan.duration_months, plan.annual_return_rate)?;
    let contribution = plan.monthly_contribution.ensure_positive("monthly_contribution")?;

    let factor = annuity_due_factor(
        plan.annual_return_rate.monthly().as_decimal(),
        plan.duration_months,
    )?;
    let total_value = contribution.multiply(factor)?;
    let total_invested = plan.total_invested()?;

    Ok(SipProjection {
        total_invested,
        estimated_returns: total_value.checked_sub(&total_invested)?,
        total_value,
    })
}

/// Monthly contribution needed to reach `target` after `months`
///
/// Inverse of [`project_future_value`] under the same convention.
pub fn required_monthly_contribution(
    target: Money,
    months: u32,
    annual_return_rate: Rate,
) -> Result<Money, InvalidInputError> {
    validate_terms(months, annual_return_rate)?;
    let target = target.ensure_positive("target")?;

    let factor = annuity_due_factor(annual_return_rate.monthly().as_decimal(), months)?;
    target.divide(factor)
}

/// Due dates for each contribution, one calendar month apart
///
/// Each date is offset from `start` directly, so a plan starting on the 31st
/// falls on the last day of shorter months and returns to the 31st after.
pub fn installment_dates(start: NaiveDate, months: u32) -> Result<Vec<NaiveDate>, InvalidInputError> {
    InvalidInputError::ensure_term_months("duration_months", months)?;

    (0..months)
        .map(|offset| {
            start
                .checked_add_months(Months::new(offset))
                .ok_or(InvalidInputError::overflow("installment date"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::MAX_TERM_MONTHS;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_return() {
        let plan = SipPlan::new(Money::inr(dec!(1000)), 10, Rate::zero());
        let projection = project_future_value(&plan).unwrap();

        assert_eq!(projection.total_value.amount(), dec!(10000));
        assert!(projection.estimated_returns.is_zero());
    }

    #[test]
    fn test_known_value() {
        // 5000 a month for a year at 12%
        let plan = SipPlan::new(Money::inr(dec!(5000)), 12, Rate::from_percentage(dec!(12)));
        let projection = project_future_value(&plan).unwrap();

        assert_eq!(projection.total_invested.amount(), dec!(60000));
        assert_eq!(projection.total_value.round_to_currency().amount(), dec!(64046.64));
        assert_eq!(
            projection.estimated_returns.round_to_currency().amount(),
            dec!(4046.64)
        );
    }

    #[test]
    fn test_single_month_earns_one_month() {
        let plan = SipPlan::new(Money::inr(dec!(1000)), 1, Rate::from_percentage(dec!(12)));
        let projection = project_future_value(&plan).unwrap();
        assert_eq!(projection.total_value.amount(), dec!(1010));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let plan = SipPlan::new(Money::inr(dec!(1000)), 0, Rate::zero());
        assert!(matches!(
            project_future_value(&plan),
            Err(InvalidInputError::NonPositiveDuration { field: "duration_months" })
        ));
    }

    #[test]
    fn test_rejects_duration_above_limit() {
        let plan = SipPlan::new(Money::inr(dec!(1000)), MAX_TERM_MONTHS + 1, Rate::zero());
        assert!(matches!(
            project_future_value(&plan),
            Err(InvalidInputError::DurationTooLong { field: "duration_months", .. })
        ));

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            installment_dates(start, u32::MAX),
            Err(InvalidInputError::DurationTooLong { .. })
        ));
        assert_eq!(
            installment_dates(start, MAX_TERM_MONTHS).unwrap().len(),
            MAX_TERM_MONTHS as usize
        );
    }

    #[test]
    fn test_rejects_zero_contribution() {
        let plan = SipPlan::new(Money::inr(Decimal::ZERO), 12, Rate::zero());
        assert!(matches!(
            project_future_value(&plan),
            Err(InvalidInputError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let plan = SipPlan::new(Money::inr(dec!(1000)), 12, Rate::from_percentage(dec!(-2)));
        assert!(matches!(
            project_future_value(&plan),
            Err(InvalidInputError::NegativeRate { .. })
        ));
    }

    #[test]
    fn test_required_contribution_zero_rate() {
        let monthly =
            required_monthly_contribution(Money::inr(dec!(120000)), 12, Rate::zero()).unwrap();
        assert_eq!(monthly.amount(), dec!(10000));
    }

    #[test]
    fn test_grams_at() {
        let plan = SipPlan::new(Money::inr(dec!(1250)), 10, Rate::zero());
        let projection = project_future_value(&plan).unwrap();
        let grams = projection.grams_at(Money::inr(dec!(6250))).unwrap();
        assert_eq!(grams.grams(), dec!(2));
    }

    #[test]
    fn test_installment_dates_clamp_to_month_end() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let dates = installment_dates(start, 4).unwrap();

        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            ]
        );
    }
}
