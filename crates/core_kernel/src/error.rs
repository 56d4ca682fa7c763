//! Input validation errors shared by every calculator
//!
//! All calculators validate eagerly and fail with [`InvalidInputError`];
//! each variant names the precondition that failed and the offending field.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Currency;

/// Longest loan tenure or SIP duration accepted, 50 years
pub const MAX_TERM_MONTHS: u32 = 600;

/// The precondition a calculator input failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveAmount {
        field: &'static str,
        value: Decimal,
    },

    #[error("{field} must be a positive price per gram, got {value}")]
    NonPositivePrice {
        field: &'static str,
        value: Decimal,
    },

    #[error("{field} must not be negative, got {value}%")]
    NegativeRate {
        field: &'static str,
        value: Decimal,
    },

    #[error("{field} must be between {min}% and {max}%, got {value}%")]
    RateOutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("{field} must be greater than zero")]
    NonPositiveDuration { field: &'static str },

    #[error("{field} must be at most {max} months, got {value}")]
    DurationTooLong {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Division by zero computing {field}")]
    ZeroDenominator { field: &'static str },

    #[error("Currency mismatch: cannot combine {expected} with {actual}")]
    CurrencyMismatch {
        expected: Currency,
        actual: Currency,
    },

    #[error("Calculation overflowed: {operation}")]
    OutOfRange { operation: &'static str },
}

impl InvalidInputError {
    pub fn negative_amount(field: &'static str, value: Decimal) -> Self {
        InvalidInputError::NegativeAmount { field, value }
    }

    pub fn non_positive_amount(field: &'static str, value: Decimal) -> Self {
        InvalidInputError::NonPositiveAmount { field, value }
    }

    pub fn non_positive_price(field: &'static str, value: Decimal) -> Self {
        InvalidInputError::NonPositivePrice { field, value }
    }

    pub fn negative_rate(field: &'static str, value: Decimal) -> Self {
        InvalidInputError::NegativeRate { field, value }
    }

    pub fn non_positive_duration(field: &'static str) -> Self {
        InvalidInputError::NonPositiveDuration { field }
    }

    pub fn duration_too_long(field: &'static str, value: u32) -> Self {
        InvalidInputError::DurationTooLong {
            field,
            value,
            max: MAX_TERM_MONTHS,
        }
    }

    /// Checks a term in months lies in `1..=MAX_TERM_MONTHS`
    pub fn ensure_term_months(field: &'static str, months: u32) -> Result<u32, Self> {
        if months == 0 {
            return Err(Self::non_positive_duration(field));
        }
        if months > MAX_TERM_MONTHS {
            return Err(Self::duration_too_long(field, months));
        }
        Ok(months)
    }

    pub fn overflow(operation: &'static str) -> Self {
        InvalidInputError::OutOfRange { operation }
    }

    /// Returns the name of the input that failed validation, if the
    /// precondition is tied to a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InvalidInputError::NegativeAmount { field, .. }
            | InvalidInputError::NonPositiveAmount { field, .. }
            | InvalidInputError::NonPositivePrice { field, .. }
            | InvalidInputError::NegativeRate { field, .. }
            | InvalidInputError::RateOutOfRange { field, .. }
            | InvalidInputError::NonPositiveDuration { field }
            | InvalidInputError::DurationTooLong { field, .. }
            | InvalidInputError::ZeroDenominator { field } => Some(*field),
            InvalidInputError::CurrencyMismatch { .. } | InvalidInputError::OutOfRange { .. } => {
                None
            }
        }
    }
}
