//! Ports for external collaborators
//!
//! The calculators never fetch a gold price or read the system clock
//! themselves. Applications supply both through these traits, which keeps
//! every calculation reproducible with fixed inputs.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │      Application facade       │
//! └──────────────┬────────────────┘
//!                │ uses
//!       ┌────────┴─────────┐
//!       ▼                  ▼
//! ┌───────────────┐  ┌───────────┐
//! │GoldPriceSource│  │   Clock   │   (ports)
//! └───────┬───────┘  └─────┬─────┘
//!         ▲                ▲
//!  live feed / cache   SystemClock / FixedClock   (adapters)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Money;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The price provider could not be reached or returned nothing
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// The provider returned data that cannot be used
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The last known price is too old to quote against
    #[error("Stale price: last update at {as_of}")]
    StalePrice { as_of: DateTime<Utc> },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a ServiceUnavailable error
    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::ServiceUnavailable { .. } | PortError::StalePrice { .. }
        )
    }
}

/// A quoted gold price per gram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldPrice {
    /// Price the customer pays per gram
    pub buy_per_gram: Money,
    /// Price the customer receives per gram
    pub sell_per_gram: Money,
    /// When the quote was taken
    pub as_of: DateTime<Utc>,
}

impl GoldPrice {
    pub fn new(buy_per_gram: Money, sell_per_gram: Money, as_of: DateTime<Utc>) -> Self {
        Self {
            buy_per_gram,
            sell_per_gram,
            as_of,
        }
    }
}

/// Source of the live or cached gold price
pub trait GoldPriceSource: Send + Sync {
    fn current_price(&self) -> Result<GoldPrice, PortError>;
}

/// Price source that always returns the same quote
#[derive(Debug, Clone)]
pub struct StaticPriceSource {
    price: GoldPrice,
}

impl StaticPriceSource {
    pub fn new(price: GoldPrice) -> Self {
        Self { price }
    }
}

impl GoldPriceSource for StaticPriceSource {
    fn current_price(&self) -> Result<GoldPrice, PortError> {
        Ok(self.price)
    }
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
