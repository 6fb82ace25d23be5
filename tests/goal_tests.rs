// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financehub::goals::project_goal;
use financehub::models::Goal;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(target: Decimal, current: Decimal, deadline: Option<NaiveDate>) -> Goal {
    Goal {
        title: "Emergency fund".into(),
        target_amount: target,
        current_amount: current,
        deadline,
    }
}

#[test]
fn twelve_months_out() {
    let today = ymd(2025, 12, 25);
    let m = project_goal(&goal(dec!(10000), dec!(2500), Some(ymd(2026, 12, 25))), today);
    assert_eq!(m.percent_complete, dec!(25));
    assert_eq!(m.amount_remaining, dec!(7500));
    assert_eq!(m.monthly_contribution, dec!(625));
    assert_eq!(format!("{:.2}", m.monthly_contribution), "625.00");
}

#[test]
fn completed_goal_needs_nothing() {
    let today = ymd(2025, 1, 1);
    for deadline in [None, Some(ymd(2024, 1, 1)), Some(ymd(2030, 6, 1))] {
        let m = project_goal(&goal(dec!(10000), dec!(10000), deadline), today);
        assert_eq!(m.percent_complete, dec!(100));
        assert_eq!(m.amount_remaining, Decimal::ZERO);
        assert_eq!(m.monthly_contribution, Decimal::ZERO);
    }
}

#[test]
fn over_completion_is_clamped() {
    let m = project_goal(&goal(dec!(1000), dec!(4000), None), ymd(2025, 1, 1));
    assert_eq!(m.percent_complete, dec!(100));
    assert_eq!(m.amount_remaining, Decimal::ZERO);
}

#[test]
fn zero_target_is_zero_percent() {
    let m = project_goal(&goal(Decimal::ZERO, dec!(50), Some(ymd(2026, 1, 1))), ymd(2025, 1, 1));
    assert_eq!(m.percent_complete, Decimal::ZERO);
    assert_eq!(m.amount_remaining, Decimal::ZERO);
    assert_eq!(m.monthly_contribution, Decimal::ZERO);

    let default = project_goal(&Goal::default(), ymd(2025, 1, 1));
    assert_eq!(default.percent_complete, Decimal::ZERO);
    assert_eq!(default.monthly_contribution, Decimal::ZERO);
}

#[test]
fn past_or_current_month_deadline_is_due_now() {
    let today = ymd(2025, 6, 15);
    let g = |deadline| goal(dec!(1000), dec!(400), Some(deadline));

    assert_eq!(project_goal(&g(ymd(2025, 6, 30)), today).monthly_contribution, dec!(600));
    assert_eq!(project_goal(&g(ymd(2025, 6, 1)), today).monthly_contribution, dec!(600));
    assert_eq!(project_goal(&g(ymd(2023, 1, 1)), today).monthly_contribution, dec!(600));
}

#[test]
fn day_of_month_is_ignored() {
    // one calendar day apart but in the next month: one month bucket
    let m = project_goal(&goal(dec!(900), Decimal::ZERO, Some(ymd(2025, 2, 1))), ymd(2025, 1, 31));
    assert_eq!(m.monthly_contribution, dec!(900));

    let m = project_goal(&goal(dec!(900), Decimal::ZERO, Some(ymd(2025, 4, 1))), ymd(2025, 1, 31));
    assert_eq!(m.monthly_contribution, dec!(300));
}

#[test]
fn no_deadline_means_no_monthly_figure() {
    let m = project_goal(&goal(dec!(1000), dec!(1), None), ymd(2025, 1, 1));
    assert!(m.amount_remaining > Decimal::ZERO);
    assert_eq!(m.monthly_contribution, Decimal::ZERO);
}

#[test]
fn percent_stays_in_range() {
    let today = ymd(2025, 1, 1);
    for (target, current) in [
        (dec!(3), dec!(1)),
        (dec!(0.01), dec!(1000000)),
        (dec!(10000), Decimal::ZERO),
        (dec!(7), dec!(7)),
    ] {
        let m = project_goal(&goal(target, current, None), today);
        assert!(m.percent_complete >= Decimal::ZERO && m.percent_complete <= dec!(100));
        assert!(m.amount_remaining >= Decimal::ZERO);
    }
}

#[test]
fn tiny_target_with_huge_savings_is_complete() {
    let today = ymd(2025, 1, 1);
    let m = project_goal(
        &goal(dec!(0.0000000001), dec!(1000000000000000000), Some(ymd(2026, 1, 1))),
        today,
    );
    assert_eq!(m.percent_complete, dec!(100));
    assert_eq!(m.amount_remaining, Decimal::ZERO);
    assert_eq!(m.monthly_contribution, Decimal::ZERO);

    let m = project_goal(&goal(Decimal::new(1, 28), Decimal::MAX, None), today);
    assert_eq!(m.percent_complete, dec!(100));
}

#[test]
fn extreme_amounts_do_not_overflow() {
    let today = ymd(2025, 1, 1);
    let m = project_goal(&goal(Decimal::MAX, Decimal::MIN, Some(ymd(2025, 7, 1))), today);
    assert_eq!(m.percent_complete, Decimal::ZERO);
    assert_eq!(m.amount_remaining, Decimal::MAX);
    assert!(m.monthly_contribution > Decimal::ZERO);
}
