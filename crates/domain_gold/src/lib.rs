//! Gold Domain
//!
//! Conversions between a currency amount and a gold weight, and the itemized
//! price breakdowns built on top of them.
//!
//! # Key Concepts
//!
//! - **Price per gram**: supplied by the caller on every computation
//! - **Conversion**: `grams = amount / price`, `amount = grams * price`
//! - **Price quote**: gross amount plus taxes and fees, minus discounts,
//!   never below zero
//!
//! # Precision
//!
//! Nothing is rounded inside this crate:
//! - Amount: ₹1,000
//! - Price: ₹6,125.50 per gram
//! - Weight: 0.163251979430... g (displayed as 0.1633 g)

pub mod converter;
pub mod breakdown;
pub mod quote;

pub use converter::{fine_weight, spread, to_amount, to_grams, Purity, Spread};
pub use breakdown::{assemble_quote, compute_breakdown, PriceQuote};
pub use quote::{
    buy_quote, jewellery_quote, sell_quote, BuyOrder, BuyQuote, JewelleryItem, JewelleryQuote,
    SellQuote, TdsPolicy,
};
