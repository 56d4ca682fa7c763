//! Gold Loan Domain
//!
//! Loans advanced against pledged gold.
//!
//! # Key Concepts
//!
//! - **LTV**: the share of the pledged gold's market value a lender advances
//! - **EMI**: a fixed monthly installment; two conventions are offered and
//!   callers pick one explicitly through [`RepaymentMethod`]
//!   - *Amortized*: `P·r·(1+r)^n / ((1+r)^n − 1)` with `r = annual / 12`
//!   - *Flat interest*: simple interest on the full principal, spread evenly
//! - **Interest-only**: bullet loans that service only the monthly interest
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Money, Rate};
//! use domain_loan::compute_emi;
//! use rust_decimal_macros::dec;
//!
//! let emi = compute_emi(Money::inr(dec!(12000)), Rate::zero(), 12).unwrap();
//! assert_eq!(emi.emi.amount(), dec!(1000));
//! ```

pub mod eligibility;
pub mod emi;
pub mod schedule;

pub use eligibility::{compute_eligibility, LoanEligibility, LoanTerms, MAX_LTV_PERCENT};
pub use emi::{
    compute_emi, compute_flat_emi, monthly_interest_only, EmiBreakdown, RepaymentMethod,
};
pub use schedule::{amortization_schedule, flat_interest_schedule, Installment};
