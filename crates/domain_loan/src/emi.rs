//! Monthly installment calculations
//!
//! Two conventions are in use for gold loans and they give different
//! installments for the same inputs. Neither is a default; callers choose
//! one with [`RepaymentMethod`] or by calling the function directly.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{InvalidInputError, Money, Rate};

/// Installment and totals over the tenure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    /// Monthly installment
    pub emi: Money,
    /// Interest paid over the tenure
    pub total_interest: Money,
    /// Principal plus interest
    pub total_payable: Money,
}

/// EMI convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepaymentMethod {
    /// Standard reducing-balance amortization
    Amortized,
    /// Simple interest on the full principal, divided evenly
    FlatInterest,
}

impl RepaymentMethod {
    /// Computes the installment under this convention
    pub fn compute(
        &self,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
    ) -> Result<EmiBreakdown, InvalidInputError> {
        match self {
            RepaymentMethod::Amortized => compute_emi(principal, annual_rate, tenure_months),
            RepaymentMethod::FlatInterest => {
                compute_flat_emi(principal, annual_rate, tenure_months)
            }
        }
    }
}

fn validate(
    principal: &Money,
    annual_rate: Rate,
    tenure_months: u32,
) -> Result<(), InvalidInputError> {
    InvalidInputError::ensure_term_months("tenure_months", tenure_months)?;
    principal.ensure_positive("principal")?;
    annual_rate.ensure_non_negative("annual_rate")?;
    Ok(())
}

/// Computes the standard amortizing EMI
///
/// `EMI = P × r × (1 + r)^n / ((1 + r)^n − 1)` where `r = annual_rate / 12`.
/// A zero rate falls back to `P / n` with no interest.
///
/// # Arguments
///
/// * `principal` - Loan amount, must be positive
/// * `annual_rate` - Annual interest rate, must not be negative
/// * `tenure_months` - Number of installments, between one and [`core_kernel::MAX_TERM_MONTHS`]
pub fn compute_emi(
    principal: Money,
    annual_rate: Rate,
    tenure_months: u32,
) -> Result<EmiBreakdown, InvalidInputError> {
    validate(&principal, annual_rate, tenure_months)?;

    let months = Decimal::from(tenure_months);
    let r = annual_rate.monthly().as_decimal();

    if r.is_zero() {
        return Ok(EmiBreakdown {
            emi: principal.divide(months)?,
            total_interest: Money::zero(principal.currency()),
            total_payable: principal,
        });
    }

    let growth = (Decimal::ONE + r)
        .checked_powu(u64::from(tenure_months))
        .ok_or(InvalidInputError::overflow("emi growth factor"))?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(InvalidInputError::ZeroDenominator { field: "emi" });
    }

    let emi = principal
        .multiply(r)?
        .multiply(growth)?
        .divide(denominator)?;
    let total_payable = emi.multiply(months)?;
    let total_interest = total_payable.checked_sub(&principal)?;

    Ok(EmiBreakdown {
        emi,
        total_interest,
        total_payable,
    })
}

/// Computes a flat simple-interest installment
///
/// `total = P + P × rate% × n / 1200`, and the installment is `total / n`
/// rounded to a whole currency unit (halves away from zero).
pub fn compute_flat_emi(
    principal: Money,
    annual_rate: Rate,
    tenure_months: u32,
) -> Result<EmiBreakdown, InvalidInputError> {
    validate(&principal, annual_rate, tenure_months)?;

    let months = Decimal::from(tenure_months);
    let rate_months = annual_rate
        .as_decimal()
        .checked_mul(months)
        .ok_or(InvalidInputError::overflow("flat interest"))?;
    // a single division keeps the total exact
    let total_interest = principal.multiply(rate_months)?.divide(dec!(12))?;
    let total_payable = principal.checked_add(&total_interest)?;

    let per_month = total_payable.divide(months)?.amount();
    let emi = Money::new(
        per_month.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        principal.currency(),
    );

    Ok(EmiBreakdown {
        emi,
        total_interest,
        total_payable,
    })
}

/// Monthly interest on a bullet loan where principal is repaid at maturity
pub fn monthly_interest_only(
    principal: Money,
    annual_rate: Rate,
) -> Result<Money, InvalidInputError> {
    principal.ensure_positive("principal")?;
    annual_rate.ensure_non_negative("annual_rate")?;
    principal.multiply(annual_rate.monthly().as_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::MAX_TERM_MONTHS;

    #[test]
    fn test_zero_rate_emi_is_exact() {
        let result = compute_emi(Money::inr(dec!(12000)), Rate::zero(), 12).unwrap();
        assert_eq!(result.emi.amount(), dec!(1000));
        assert!(result.total_interest.is_zero());
        assert_eq!(result.total_payable.amount(), dec!(12000));
    }

    #[test]
    fn test_standard_emi() {
        // 1 lakh at 12% for 12 months
        let result = compute_emi(Money::inr(dec!(100000)), Rate::from_percentage(dec!(12)), 12)
            .unwrap();
        assert_eq!(result.emi.round_to_currency().amount(), dec!(8884.88));
        assert_eq!(result.total_interest.round_to_currency().amount(), dec!(6618.55));
    }

    #[test]
    fn test_single_month_tenure() {
        let result = compute_emi(Money::inr(dec!(10000)), Rate::from_percentage(dec!(12)), 1)
            .unwrap();
        // one installment of principal plus one month's interest
        assert_eq!(result.emi.round_to_currency().amount(), dec!(10100));
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let result = compute_emi(Money::inr(dec!(1000)), Rate::from_percentage(dec!(9.5)), 0);
        assert!(matches!(
            result,
            Err(InvalidInputError::NonPositiveDuration { field: "tenure_months" })
        ));
    }

    #[test]
    fn test_flat_emi() {
        // 50000 at 12% for 6 months: 3000 interest, 53000 / 6 = 8833.33 -> 8833
        let result =
            compute_flat_emi(Money::inr(dec!(50000)), Rate::from_percentage(dec!(12)), 6).unwrap();
        assert_eq!(result.total_interest.amount(), dec!(3000));
        assert_eq!(result.total_payable.amount(), dec!(53000));
        assert_eq!(result.emi.amount(), dec!(8833));
    }

    #[test]
    fn test_flat_emi_rounds_half_up() {
        // 1000 at 0% over 16 months is 62.5 per month
        let result = compute_flat_emi(Money::inr(dec!(1000)), Rate::zero(), 16).unwrap();
        assert_eq!(result.emi.amount(), dec!(63));
    }

    #[test]
    fn test_flat_emi_interest_is_exact_at_midpoint() {
        // 600 at 1% for 12 months: 6 interest, 606 / 12 = 50.5 -> 51
        let result =
            compute_flat_emi(Money::inr(dec!(600)), Rate::from_percentage(dec!(1)), 12).unwrap();
        assert_eq!(result.total_interest.amount(), dec!(6));
        assert_eq!(result.total_payable.amount(), dec!(606));
        assert_eq!(result.emi.amount(), dec!(51));
    }

    #[test]
    fn test_tenure_above_limit_rejected() {
        let principal = Money::inr(dec!(1000));
        for method in [RepaymentMethod::Amortized, RepaymentMethod::FlatInterest] {
            assert!(method.compute(principal, Rate::zero(), MAX_TERM_MONTHS).is_ok());
            assert!(matches!(
                method.compute(principal, Rate::zero(), MAX_TERM_MONTHS + 1),
                Err(InvalidInputError::DurationTooLong { field: "tenure_months", .. })
            ));
        }
    }

    #[test]
    fn test_methods_disagree() {
        let principal = Money::inr(dec!(100000));
        let rate = Rate::from_percentage(dec!(12));
        let amortized = RepaymentMethod::Amortized.compute(principal, rate, 12).unwrap();
        let flat = RepaymentMethod::FlatInterest.compute(principal, rate, 12).unwrap();
        assert!(flat.total_interest.amount() > amortized.total_interest.amount());
    }

    #[test]
    fn test_interest_only() {
        let interest =
            monthly_interest_only(Money::inr(dec!(100000)), Rate::from_percentage(dec!(12)))
                .unwrap();
        assert_eq!(interest.amount(), dec!(1000));
    }
}
