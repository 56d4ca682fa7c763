//! Calculator error handling

use thiserror::Error;

use core_kernel::{InvalidInputError, PortError};

/// Errors returned by the calculator facade
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// A calculation rejected its input
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The gold price could not be obtained
    #[error("Price unavailable: {0}")]
    Price(#[from] PortError),

    /// The rate card could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CalculatorError {
    /// Field that failed validation, when the error came from a calculator
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalculatorError::InvalidInput(err) => err.field(),
            _ => None,
        }
    }

    /// Returns true if retrying later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, CalculatorError::Price(err) if err.is_transient())
    }
}
