//! Savings goal progress

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{GoldWeight, InvalidInputError, Money};
use domain_gold::to_grams;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A savings goal
///
/// `current_amount` above `target_amount` is valid and means the goal has
/// been exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub target_amount: Money,
    pub current_amount: Money,
    /// Zero when the goal has no weight target
    pub target_grams: GoldWeight,
    pub current_grams: GoldWeight,
    pub deadline: NaiveDate,
}

/// Where a goal stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    Achieved,
    /// Deadline passed before the target was reached
    Overdue,
}

/// Progress snapshot of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// `current / target × 100`, may exceed 100
    pub percent: Decimal,
    /// `percent` capped at 100
    pub display_percent: Decimal,
    /// Whole days to the deadline, rounded up; negative once it has passed
    pub days_remaining: i64,
    pub remaining_amount: Money,
    /// Gold still to buy at the given price
    pub remaining_grams: GoldWeight,
    /// `current_grams / target_grams × 100` when a weight target is set
    pub weight_percent: Option<Decimal>,
    pub status: GoalStatus,
}

/// Days from `now` until the start of `deadline` (00:00 UTC), rounded up
pub fn days_until(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let deadline = Utc.from_utc_datetime(&deadline.and_time(NaiveTime::MIN));
    let millis = (deadline - now).num_milliseconds();

    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

fn percent_of(part: Decimal, whole: Decimal) -> Result<Decimal, InvalidInputError> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(InvalidInputError::overflow("goal percent"))
}

/// Computes progress towards a goal
///
/// # Arguments
///
/// * `goal` - The goal, whose target amount must be positive
/// * `price_per_gram` - Current buy price, used for `remaining_grams`
/// * `now` - Current instant
pub fn compute_progress(
    goal: &Goal,
    price_per_gram: Money,
    now: DateTime<Utc>,
) -> Result<GoalProgress, InvalidInputError> {
    let target = goal.target_amount.ensure_positive("target_amount")?;
    let current = goal.current_amount.ensure_non_negative("current_amount")?;
    target.ensure_same_currency(&current)?;
    let target_grams = goal.target_grams.ensure_non_negative("target_grams")?;
    let current_grams = goal.current_grams.ensure_non_negative("current_grams")?;

    let percent = percent_of(current.amount(), target.amount())?;
    let remaining_amount = target.checked_sub(&current)?.clamp_to_zero();
    let remaining_grams = to_grams(remaining_amount, price_per_gram)?;

    let weight_percent = if target_grams.is_zero() {
        None
    } else {
        Some(percent_of(current_grams.grams(), target_grams.grams())?)
    };

    let days_remaining = days_until(goal.deadline, now);
    let status = if percent >= dec!(100) {
        GoalStatus::Achieved
    } else if days_remaining < 0 {
        GoalStatus::Overdue
    } else {
        GoalStatus::InProgress
    };

    Ok(GoalProgress {
        percent,
        display_percent: percent.min(dec!(100)),
        days_remaining,
        remaining_amount,
        remaining_grams,
        weight_percent,
        status,
    })
}
