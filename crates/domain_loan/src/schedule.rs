//! Month-by-month amortization of an EMI loan

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{InvalidInputError, Money, Rate};

use crate::emi::{compute_emi, compute_flat_emi, RepaymentMethod};

/// One row of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based installment number
    pub number: u32,
    pub opening_balance: Money,
    /// Amount paid this month
    pub emi: Money,
    /// Interest portion of the payment
    pub interest: Money,
    /// Principal portion of the payment
    pub principal: Money,
    pub closing_balance: Money,
}

/// Generates the reducing-balance schedule for an amortized loan
///
/// Interest each month is charged on the opening balance. The final
/// installment settles whatever balance remains, so the schedule always
/// closes at exactly zero.
pub fn amortization_schedule(
    principal: Money,
    annual_rate: Rate,
    tenure_months: u32,
) -> Result<Vec<Installment>, InvalidInputError> {
    let emi = compute_emi(principal, annual_rate, tenure_months)?.emi;
    let monthly_rate = annual_rate.monthly().as_decimal();

    let mut schedule = Vec::with_capacity(tenure_months as usize);
    let mut balance = principal;

    for number in 1..=tenure_months {
        let interest = balance.multiply(monthly_rate)?;

        let (payment, principal_part) = if number == tenure_months {
            (balance.checked_add(&interest)?, balance)
        } else {
            (emi, emi.checked_sub(&interest)?)
        };
        let closing_balance = balance.checked_sub(&principal_part)?;

        schedule.push(Installment {
            number,
            opening_balance: balance,
            emi: payment,
            interest,
            principal: principal_part,
            closing_balance,
        });

        balance = closing_balance;
    }

    Ok(schedule)
}

/// Generates the schedule for a flat simple-interest loan
///
/// Every month carries an equal share of the total interest and pays the
/// rounded flat installment. The final installment settles whatever balance
/// remains; if rounding would overpay earlier, the principal portion stops at
/// the outstanding balance.
pub fn flat_interest_schedule(
    principal: Money,
    annual_rate: Rate,
    tenure_months: u32,
) -> Result<Vec<Installment>, InvalidInputError> {
    let breakdown = compute_flat_emi(principal, annual_rate, tenure_months)?;
    let interest = breakdown
        .total_interest
        .divide(Decimal::from(tenure_months))?;
    let scheduled_principal = breakdown.emi.checked_sub(&interest)?.clamp_to_zero();

    let mut schedule = Vec::with_capacity(tenure_months as usize);
    let mut balance = principal;

    for number in 1..=tenure_months {
        let principal_part = if number == tenure_months
            || scheduled_principal.amount() > balance.amount()
        {
            balance
        } else {
            scheduled_principal
        };
        let closing_balance = balance.checked_sub(&principal_part)?;

        schedule.push(Installment {
            number,
            opening_balance: balance,
            emi: principal_part.checked_add(&interest)?,
            interest,
            principal: principal_part,
            closing_balance,
        });

        balance = closing_balance;
    }

    Ok(schedule)
}

impl RepaymentMethod {
    /// Month-by-month schedule under this convention
    pub fn schedule(
        &self,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
    ) -> Result<Vec<Installment>, InvalidInputError> {
        match self {
            RepaymentMethod::Amortized => {
                amortization_schedule(principal, annual_rate, tenure_months)
            }
            RepaymentMethod::FlatInterest => {
                flat_interest_schedule(principal, annual_rate, tenure_months)
            }
        }
    }
}
