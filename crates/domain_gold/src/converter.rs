//! Conversion between currency amounts and gold weight

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{GoldWeight, InvalidInputError, Money};

/// Converts an amount to the weight of gold it buys at `price_per_gram`
///
/// # Arguments
///
/// * `amount` - The monetary amount to convert
/// * `price_per_gram` - Gold price per gram, in the same currency
///
/// # Returns
///
/// The weight in grams at full precision
///
/// # Example
///
/// ```rust
/// use core_kernel::Money;
/// use domain_gold::to_grams;
/// use rust_decimal_macros::dec;
///
/// let grams = to_grams(Money::inr(dec!(12500)), Money::inr(dec!(6250))).unwrap();
/// assert_eq!(grams.grams(), dec!(2));
/// ```
pub fn to_grams(amount: Money, price_per_gram: Money) -> Result<GoldWeight, InvalidInputError> {
    if !price_per_gram.is_positive() {
        return Err(InvalidInputError::non_positive_price(
            "price_per_gram",
            price_per_gram.amount(),
        ));
    }
    amount.ensure_non_negative("amount")?;
    amount.ensure_same_currency(&price_per_gram)?;

    let grams = amount
        .amount()
        .checked_div(price_per_gram.amount())
        .ok_or(InvalidInputError::overflow("grams from amount"))?;
    Ok(GoldWeight::from_grams(grams))
}

/// Converts a weight of gold to its value at `price_per_gram`
pub fn to_amount(grams: GoldWeight, price_per_gram: Money) -> Result<Money, InvalidInputError> {
    grams.ensure_non_negative("grams")?;
    price_per_gram.ensure_non_negative("price_per_gram")?;
    price_per_gram.multiply(grams.grams())
}

/// Difference between the buy and sell quoted prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// `buy - sell`
    pub absolute: Money,
    /// Absolute spread as a percentage of the buy price
    pub percent: Decimal,
}

/// Computes the buy/sell spread
pub fn spread(buy_price: Money, sell_price: Money) -> Result<Spread, InvalidInputError> {
    if !buy_price.is_positive() {
        return Err(InvalidInputError::non_positive_price("buy_price", buy_price.amount()));
    }
    if !sell_price.is_positive() {
        return Err(InvalidInputError::non_positive_price("sell_price", sell_price.amount()));
    }

    let absolute = buy_price.checked_sub(&sell_price)?;
    let percent = absolute
        .amount()
        .checked_div(buy_price.amount())
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(InvalidInputError::overflow("spread percent"))?;
    Ok(Spread { absolute, percent })
}

/// Gold purity in karats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purity {
    K24,
    K22,
    K18,
    K14,
}

impl Purity {
    /// Karat number (parts of gold per 24)
    pub fn karat(&self) -> u32 {
        match self {
            Purity::K24 => 24,
            Purity::K22 => 22,
            Purity::K18 => 18,
            Purity::K14 => 14,
        }
    }

    /// Fraction of pure gold, `karat / 24`
    pub fn fineness(&self) -> Decimal {
        Decimal::from(self.karat()) / dec!(24)
    }
}

/// Pure-gold content of a piece weighing `gross`
pub fn fine_weight(gross: GoldWeight, purity: Purity) -> Result<GoldWeight, InvalidInputError> {
    gross.ensure_non_negative("gross_weight")?;
    let grams = gross
        .grams()
        .checked_mul(Decimal::from(purity.karat()))
        .and_then(|parts| parts.checked_div(dec!(24)))
        .ok_or(InvalidInputError::overflow("fine weight"))?;
    Ok(GoldWeight::from_grams(grams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    #[test]
    fn test_to_grams() {
        let grams = to_grams(Money::inr(dec!(1000)), Money::inr(dec!(6250))).unwrap();
        assert_eq!(grams.grams(), dec!(0.16));
    }

    #[test]
    fn test_to_grams_rejects_zero_price() {
        let result = to_grams(Money::inr(dec!(100)), Money::inr(dec!(0)));
        assert!(matches!(
            result,
            Err(InvalidInputError::NonPositivePrice { field: "price_per_gram", .. })
        ));
    }

    #[test]
    fn test_to_grams_rejects_currency_mismatch() {
        let result = to_grams(
            Money::new(dec!(100), Currency::USD),
            Money::inr(dec!(6250)),
        );
        assert!(matches!(result, Err(InvalidInputError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_to_amount() {
        let value = to_amount(GoldWeight::from_grams(dec!(2.5)), Money::inr(dec!(6000))).unwrap();
        assert_eq!(value.amount(), dec!(15000));
    }

    #[test]
    fn test_to_amount_accepts_zero_price() {
        let value = to_amount(GoldWeight::from_grams(dec!(1)), Money::inr(dec!(0))).unwrap();
        assert!(value.is_zero());
    }

    #[test]
    fn test_to_amount_rejects_negative_grams() {
        let result = to_amount(GoldWeight::from_grams(dec!(-1)), Money::inr(dec!(6000)));
        assert!(matches!(
            result,
            Err(InvalidInputError::NegativeAmount { field: "grams", .. })
        ));
    }

    #[test]
    fn test_spread() {
        let s = spread(Money::inr(dec!(6400)), Money::inr(dec!(6208))).unwrap();
        assert_eq!(s.absolute.amount(), dec!(192));
        assert_eq!(s.percent, dec!(3));
    }

    #[test]
    fn test_fineness() {
        assert_eq!(Purity::K24.fineness(), dec!(1));
        assert_eq!(Purity::K18.fineness(), dec!(0.75));
    }

    #[test]
    fn test_fine_weight() {
        let fine = fine_weight(GoldWeight::from_grams(dec!(12)), Purity::K22).unwrap();
        assert_eq!(fine.grams(), dec!(11));
    }

    #[test]
    fn test_fine_weight_overflow_is_an_error() {
        let result = fine_weight(GoldWeight::from_grams(Decimal::MAX / dec!(10)), Purity::K22);
        assert_eq!(result, Err(InvalidInputError::overflow("fine weight")));
    }

    #[test]
    fn test_spread_overflow_is_an_error() {
        let result = spread(Money::inr(Decimal::MAX), Money::inr(Decimal::new(1, 28)));
        assert_eq!(result, Err(InvalidInputError::overflow("spread percent")));
    }
}
