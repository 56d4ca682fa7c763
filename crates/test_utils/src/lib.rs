//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! gold calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built prices, dates and amounts
//! - `builders`: Builder patterns for loan terms, SIP plans and goals
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing setup for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
