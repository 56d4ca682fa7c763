//! Core Kernel - Foundational types for the gold finance calculators
//!
//! This crate provides the building blocks shared by every calculation domain:
//! - Money and Rate types with precise decimal arithmetic
//! - GoldWeight, a gram quantity carried at full precision
//! - The single input-validation error used by all calculators
//! - Ports for the collaborators the calculators never own (price feed, clock)

pub mod money;
pub mod weight;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, Rate};
pub use weight::GoldWeight;
pub use error::{InvalidInputError, MAX_TERM_MONTHS};
pub use ports::{
    Clock, FixedClock, GoldPrice, GoldPriceSource, PortError, StaticPriceSource, SystemClock,
};
