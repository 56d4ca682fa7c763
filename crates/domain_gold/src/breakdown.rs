//! Itemized price breakdowns
//!
//! A [`PriceQuote`] is the gross amount plus taxes and fees, minus
//! discounts. The net is never negative: a quote whose discounts exceed
//! everything else is clamped to zero and flagged `over_discounted`.

use serde::{Deserialize, Serialize};

use core_kernel::{InvalidInputError, Money, Rate};

/// An itemized total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Amount before taxes, fees and discounts
    pub gross_amount: Money,
    /// Tax lines
    pub taxes: Vec<Money>,
    /// Fee lines (shipping, making charges billed separately, ...)
    pub fees: Vec<Money>,
    /// Discount and deduction lines
    pub discounts: Vec<Money>,
    /// `max(gross + taxes + fees - discounts, 0)`
    pub net_amount: Money,
    /// True when the unclamped net would have been negative
    pub over_discounted: bool,
}

/// Computes a breakdown with a single tax line charged on `base_amount`
///
/// # Arguments
///
/// * `base_amount` - Gross amount, must not be negative
/// * `tax_rate` - Tax charged on the base, must not be negative
/// * `fees` - Flat fees added to the total
/// * `discounts` - Flat discounts subtracted from the total
///
/// # Example
///
/// ```rust
/// use core_kernel::{Money, Rate};
/// use domain_gold::compute_breakdown;
/// use rust_decimal_macros::dec;
///
/// let quote = compute_breakdown(
///     Money::inr(dec!(10000)),
///     Rate::from_percentage(dec!(3)),
///     &[Money::inr(dec!(50))],
///     &[Money::inr(dec!(100))],
/// )
/// .unwrap();
/// assert_eq!(quote.net_amount.amount(), dec!(10250));
/// ```
pub fn compute_breakdown(
    base_amount: Money,
    tax_rate: Rate,
    fees: &[Money],
    discounts: &[Money],
) -> Result<PriceQuote, InvalidInputError> {
    base_amount.ensure_non_negative("base_amount")?;
    tax_rate.ensure_non_negative("tax_rate")?;

    let tax = tax_rate.apply(&base_amount)?;
    assemble_quote(base_amount, vec![tax], fees.to_vec(), discounts.to_vec())
}

/// Builds a quote from line items that were already computed
///
/// All lines must be non-negative and share the gross amount's currency.
pub fn assemble_quote(
    gross_amount: Money,
    taxes: Vec<Money>,
    fees: Vec<Money>,
    discounts: Vec<Money>,
) -> Result<PriceQuote, InvalidInputError> {
    gross_amount.ensure_non_negative("gross_amount")?;
    let currency = gross_amount.currency();

    for tax in &taxes {
        tax.ensure_non_negative("tax")?;
    }
    for fee in &fees {
        fee.ensure_non_negative("fee")?;
    }
    for discount in &discounts {
        discount.ensure_non_negative("discount")?;
    }

    let raw_net = gross_amount
        .checked_add(&Money::sum(&taxes, currency)?)?
        .checked_add(&Money::sum(&fees, currency)?)?
        .checked_sub(&Money::sum(&discounts, currency)?)?;

    Ok(PriceQuote {
        gross_amount,
        taxes,
        fees,
        discounts,
        net_amount: raw_net.clamp_to_zero(),
        over_discounted: raw_net.is_negative(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_adds_tax_and_fees() {
        let quote = compute_breakdown(
            Money::inr(dec!(1000)),
            Rate::from_percentage(dec!(3)),
            &[Money::inr(dec!(20)), Money::inr(dec!(5))],
            &[],
        )
        .unwrap();

        assert_eq!(quote.gross_amount.amount(), dec!(1000));
        assert_eq!(quote.taxes, vec![Money::inr(dec!(30))]);
        assert_eq!(quote.net_amount.amount(), dec!(1055));
        assert!(!quote.over_discounted);
    }

    #[test]
    fn test_over_discount_clamps_to_zero() {
        let quote = compute_breakdown(
            Money::inr(dec!(100)),
            Rate::zero(),
            &[],
            &[Money::inr(dec!(250))],
        )
        .unwrap();

        assert!(quote.net_amount.is_zero());
        assert!(quote.over_discounted);
    }

    #[test]
    fn test_exact_discount_is_not_flagged() {
        let quote = compute_breakdown(
            Money::inr(dec!(100)),
            Rate::zero(),
            &[],
            &[Money::inr(dec!(100))],
        )
        .unwrap();

        assert!(quote.net_amount.is_zero());
        assert!(!quote.over_discounted);
    }

    #[test]
    fn test_negative_base_rejected() {
        let result = compute_breakdown(Money::inr(dec!(-1)), Rate::zero(), &[], &[]);
        assert!(matches!(
            result,
            Err(InvalidInputError::NegativeAmount { field: "base_amount", .. })
        ));
    }

    #[test]
    fn test_negative_tax_rate_rejected() {
        let result = compute_breakdown(
            Money::inr(dec!(100)),
            Rate::from_percentage(dec!(-3)),
            &[],
            &[],
        );
        assert!(matches!(result, Err(InvalidInputError::NegativeRate { .. })));
    }
}
