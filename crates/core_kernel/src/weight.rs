//! Gold weight in grams

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidInputError;

/// Decimal places used when presenting a weight
pub const DISPLAY_PRECISION: u32 = 4;

/// A quantity of gold in grams, kept at full precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GoldWeight {
    grams: Decimal,
}

impl GoldWeight {
    pub fn from_grams(grams: Decimal) -> Self {
        Self { grams }
    }

    pub fn zero() -> Self {
        Self {
            grams: Decimal::ZERO,
        }
    }

    pub fn grams(&self) -> Decimal {
        self.grams
    }

    pub fn is_zero(&self) -> bool {
        self.grams.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.grams < Decimal::ZERO
    }

    /// Fails with `NegativeAmount` if the weight is below zero
    pub fn ensure_non_negative(self, field: &'static str) -> Result<Self, InvalidInputError> {
        if self.is_negative() {
            return Err(InvalidInputError::negative_amount(field, self.grams));
        }
        Ok(self)
    }

    /// Difference floored at zero grams
    pub fn saturating_sub(&self, other: &GoldWeight) -> GoldWeight {
        Self {
            grams: (self.grams - other.grams).max(Decimal::ZERO),
        }
    }

    /// Rounds to display precision (4 decimal places)
    pub fn round_for_display(&self) -> Decimal {
        self.grams.round_dp(DISPLAY_PRECISION)
    }
}

impl fmt::Display for GoldWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} g", self.round_for_display())
    }
}
