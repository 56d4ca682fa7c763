//! Savings Domain
//!
//! Recurring gold investments (SIP) and savings goals.
//!
//! # Key Concepts
//!
//! - **SIP**: a fixed contribution invested at the start of every month
//! - **Future value**: annuity-due compounding at `annual / 12` per month
//! - **Goal**: a target amount (and optionally a target weight) with a deadline
//!
//! The current date is always passed in. Nothing here reads the system clock.

pub mod sip;
pub mod goal;

pub use sip::{
    installment_dates, project_future_value, required_monthly_contribution, SipPlan,
    SipProjection,
};
pub use goal::{compute_progress, days_until, Goal, GoalProgress, GoalStatus};
