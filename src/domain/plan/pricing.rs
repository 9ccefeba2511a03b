//! Prorated plan-change pricing
//!
//! A subscriber switching plans part-way through a cycle pays the full
//! price of the target plan, less the target plan's share for the days
//! already elapsed, less the unused value of the current plan.

use super::model::Plan;

/// Length of a billing cycle in days. Fixed; plans carry no period field.
pub const BILLING_CYCLE_DAYS: i32 = 30;

/// Amount owed (positive) or credited (negative) when moving from
/// `current` to `target` with `remaining_days` left in the cycle.
///
/// ```text
/// elapsed = 30 - remaining_days
/// target.price - (target.price / 30) * elapsed - (current.price / 30) * remaining_days
/// ```
///
/// Inputs are not validated: negative prices or day counts outside
/// `0..=30` produce the arithmetic result of the formula.
pub fn upgrade_price(current: &Plan, target: &Plan, remaining_days: i32) -> f64 {
    let cycle = f64::from(BILLING_CYCLE_DAYS);
    let remaining = f64::from(remaining_days);
    let elapsed = cycle - remaining;
    let target_price = f64::from(target.price);
    let current_price = f64::from(current.price);

    target_price - (target_price / cycle) * elapsed - (current_price / cycle) * remaining
}

// ── Tests ──────────────────────────────────────────────────────
