//! Buy, sell and jewellery quotes
//!
//! Each quote composes the unit converter with a [`PriceQuote`] breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{GoldWeight, InvalidInputError, Money, Rate};

use crate::breakdown::{assemble_quote, compute_breakdown, PriceQuote};
use crate::converter::{fine_weight, to_amount, to_grams, Purity};

/// What the customer asked to buy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyOrder {
    /// Spend this amount (before GST)
    ByAmount(Money),
    /// Buy this weight
    ByWeight(GoldWeight),
}

/// Quote for a digital gold purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyQuote {
    pub grams: GoldWeight,
    pub price_per_gram: Money,
    /// Gold value with GST on top
    pub breakdown: PriceQuote,
}

/// Prices a purchase at the buy rate with GST charged on the gold value
pub fn buy_quote(
    order: BuyOrder,
    buy_price: Money,
    gst_rate: Rate,
) -> Result<BuyQuote, InvalidInputError> {
    if !buy_price.is_positive() {
        return Err(InvalidInputError::non_positive_price("buy_price", buy_price.amount()));
    }

    let (grams, base) = match order {
        BuyOrder::ByAmount(amount) => {
            let amount = amount.ensure_positive("amount")?;
            (to_grams(amount, buy_price)?, amount)
        }
        BuyOrder::ByWeight(grams) => {
            if grams.grams() <= Decimal::ZERO {
                return Err(InvalidInputError::non_positive_amount("grams", grams.grams()));
            }
            (grams, to_amount(grams, buy_price)?)
        }
    };

    Ok(BuyQuote {
        grams,
        price_per_gram: buy_price,
        breakdown: compute_breakdown(base, gst_rate, &[], &[])?,
    })
}

/// Tax deducted at source on large sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsPolicy {
    pub rate: Rate,
    /// TDS applies only when the sale value exceeds this amount
    pub threshold: Money,
}

impl TdsPolicy {
    pub fn new(rate: Rate, threshold: Money) -> Self {
        Self { rate, threshold }
    }

    /// Amount withheld on a sale of `gross`
    pub fn withheld_on(&self, gross: &Money) -> Result<Money, InvalidInputError> {
        self.rate.ensure_non_negative("tds_rate")?;
        gross.ensure_same_currency(&self.threshold)?;
        if gross.amount() > self.threshold.amount() {
            self.rate.apply(gross)
        } else {
            Ok(Money::zero(gross.currency()))
        }
    }
}

/// Quote for selling gold back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellQuote {
    pub grams: GoldWeight,
    pub price_per_gram: Money,
    pub tds_withheld: Money,
    /// Sale value with TDS as a deduction
    pub breakdown: PriceQuote,
}

/// Prices a sale at the sell rate, withholding TDS above the threshold
pub fn sell_quote(
    grams: GoldWeight,
    sell_price: Money,
    tds: &TdsPolicy,
) -> Result<SellQuote, InvalidInputError> {
    if grams.grams() <= Decimal::ZERO {
        return Err(InvalidInputError::non_positive_amount("grams", grams.grams()));
    }
    if !sell_price.is_positive() {
        return Err(InvalidInputError::non_positive_price("sell_price", sell_price.amount()));
    }

    let gross = to_amount(grams, sell_price)?;
    let tds_withheld = tds.withheld_on(&gross)?;
    let deductions = if tds_withheld.is_zero() {
        Vec::new()
    } else {
        vec![tds_withheld]
    };

    Ok(SellQuote {
        grams,
        price_per_gram: sell_price,
        tds_withheld,
        breakdown: assemble_quote(gross, Vec::new(), Vec::new(), deductions)?,
    })
}

/// A jewellery piece to be priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JewelleryItem {
    pub gross_weight: GoldWeight,
    pub purity: Purity,
    /// Making charges as a percentage of the gold value
    pub making_charge: Rate,
}

/// Quote for a jewellery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JewelleryQuote {
    pub fine_weight: GoldWeight,
    pub gold_value: Money,
    pub making_charges: Money,
    /// Gold value plus making charges, with GST, shipping and discounts
    pub breakdown: PriceQuote,
}

/// Prices a jewellery order
///
/// GST is charged on gold value plus making charges; shipping is a flat fee.
pub fn jewellery_quote(
    item: &JewelleryItem,
    price_per_gram_24k: Money,
    gst_rate: Rate,
    shipping: Money,
    discounts: &[Money],
) -> Result<JewelleryQuote, InvalidInputError> {
    if !price_per_gram_24k.is_positive() {
        return Err(InvalidInputError::non_positive_price(
            "price_per_gram_24k",
            price_per_gram_24k.amount(),
        ));
    }
    let making_rate = item.making_charge.ensure_non_negative("making_charge")?;

    let fine = fine_weight(item.gross_weight, item.purity)?;
    let gold_value = to_amount(fine, price_per_gram_24k)?;
    let making_charges = making_rate.apply(&gold_value)?;
    let base = gold_value.checked_add(&making_charges)?;

    Ok(JewelleryQuote {
        fine_weight: fine,
        gold_value,
        making_charges,
        breakdown: compute_breakdown(base, gst_rate, &[shipping], discounts)?,
    })
}
