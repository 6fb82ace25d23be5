// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Goal, GoalMetrics};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Progress figures for `goal` as seen on `today`.
///
/// The month count is `(year diff) * 12 + (month diff)`; day of month is
/// ignored. A deadline in the current month or earlier counts as one month,
/// so the whole remaining amount is due now.
pub fn project_goal(goal: &Goal, today: NaiveDate) -> GoalMetrics {
    let remaining = goal
        .target_amount
        .saturating_sub(goal.current_amount)
        .max(Decimal::ZERO);

    let percent = if goal.target_amount > Decimal::ZERO {
        goal.current_amount
            .checked_div(goal.target_amount)
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            // only a current amount far beyond the target overflows
            .unwrap_or(if goal.current_amount.is_sign_negative() {
                Decimal::ZERO
            } else {
                HUNDRED
            })
            .min(HUNDRED)
            .max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let monthly = match goal.deadline {
        Some(deadline) if remaining > Decimal::ZERO => {
            let months = months_between(today, deadline).max(1);
            remaining / Decimal::from(months)
        }
        _ => Decimal::ZERO,
    };

    GoalMetrics {
        percent_complete: percent,
        amount_remaining: remaining,
        monthly_contribution: monthly,
    }
}

fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let years = i64::from(to.year()) - i64::from(from.year());
    let months = i64::from(to.month()) - i64::from(from.month());
    years * 12 + months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_difference_ignores_day_of_month() {
        assert_eq!(months_between(ymd(2025, 1, 31), ymd(2025, 2, 1)), 1);
        assert_eq!(months_between(ymd(2025, 11, 1), ymd(2026, 2, 28)), 3);
        assert_eq!(months_between(ymd(2025, 6, 1), ymd(2024, 6, 1)), -12);
    }
}
