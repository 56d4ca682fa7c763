//! Gold Calculator Service
//!
//! Facade over the calculation domains for applications that hold a rate
//! card and a live price feed.
//!
//! # Architecture
//!
//! - **Config**: rate card loaded from `GOLD_*` environment variables
//! - **Service**: [`GoldCalculator`], which fetches the price through a
//!   [`core_kernel::GoldPriceSource`] and the time through a [`core_kernel::Clock`]
//! - **Errors**: domain, price-feed and configuration failures in one enum
//! - **Telemetry**: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use calc_service::{CalculatorConfig, GoldCalculator};
//! use chrono::Utc;
//! use core_kernel::{FixedClock, GoldPrice, Money, StaticPriceSource};
//! use domain_gold::BuyOrder;
//! use rust_decimal_macros::dec;
//!
//! let now = Utc::now();
//! let prices = StaticPriceSource::new(GoldPrice::new(
//!     Money::inr(dec!(6250)),
//!     Money::inr(dec!(6100)),
//!     now,
//! ));
//! let calculator =
//!     GoldCalculator::new(CalculatorConfig::default(), prices, FixedClock(now)).unwrap();
//!
//! let quote = calculator.buy_quote(BuyOrder::ByAmount(Money::inr(dec!(12500)))).unwrap();
//! assert_eq!(quote.grams.grams(), dec!(2));
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::CalculatorConfig;
pub use error::CalculatorError;
pub use service::{GoldCalculator, LoanOffer, SipOutlook};
pub use telemetry::init_tracing;
