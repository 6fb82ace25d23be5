// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financehub::models::{Summary, Transaction, TransactionKind};
use financehub::summary::{aggregate_summary, monthly_totals, spending_alert};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tx(id: i64, amount: Decimal, kind: TransactionKind, date: &str) -> Transaction {
    Transaction {
        id,
        user_id: 1,
        title: format!("t{}", id),
        amount,
        kind,
        category: String::new(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, dec!(5000.00), TransactionKind::Income, "2025-12-01"),
        tx(2, dec!(45.90), TransactionKind::Expense, "2025-12-03"),
        tx(3, dec!(15.50), TransactionKind::Expense, "2025-12-04"),
    ]
}

#[test]
fn dashboard_scenario() {
    let s = aggregate_summary(&sample());
    assert_eq!(s.total_income, dec!(5000));
    assert_eq!(s.total_expense, dec!(61.40));
    assert_eq!(s.balance, dec!(4938.60));
    assert_eq!(s.income_count, 1);
    assert_eq!(s.expense_count, 2);
    assert_eq!(format!("{:.2}", s.balance), "4938.60");
}

#[test]
fn empty_list_is_all_zero() {
    assert_eq!(aggregate_summary(&[]), Summary::default());
}

#[test]
fn balance_and_counts_hold_for_mixed_lists() {
    let mut txs = sample();
    txs.push(tx(4, dec!(-20), TransactionKind::Expense, "2025-11-30"));
    txs.push(tx(5, dec!(0.01), TransactionKind::Income, "2024-01-15"));
    txs.push(tx(6, dec!(1234.567), TransactionKind::Expense, "2025-02-02"));

    let s = aggregate_summary(&txs);
    assert_eq!(s.balance, s.total_income - s.total_expense);
    assert_eq!(s.income_count + s.expense_count, txs.len());
    // negative amounts are summed as given
    assert_eq!(s.total_expense, dec!(45.90) + dec!(15.50) - dec!(20) + dec!(1234.567));

    let mut reversed = txs.clone();
    reversed.reverse();
    assert_eq!(aggregate_summary(&reversed), s);
}

#[test]
fn monthly_totals_are_chronological_and_sum_to_summary() {
    let mut txs = sample();
    txs.push(tx(4, dec!(300), TransactionKind::Income, "2025-10-10"));
    txs.push(tx(5, dec!(100), TransactionKind::Expense, "2025-11-01"));

    let months = monthly_totals(&txs, None);
    let keys: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(keys, ["2025-10", "2025-11", "2025-12"]);
    assert_eq!(months[2].income, dec!(5000));
    assert_eq!(months[2].expense, dec!(61.40));
    assert_eq!(months[1].balance, dec!(-100));

    let s = aggregate_summary(&txs);
    let income: Decimal = months.iter().map(|m| m.income).sum();
    let expense: Decimal = months.iter().map(|m| m.expense).sum();
    assert_eq!(income, s.total_income);
    assert_eq!(expense, s.total_expense);

    let last_two = monthly_totals(&txs, Some(2));
    assert_eq!(last_two.len(), 2);
    assert_eq!(last_two[0].month, "2025-11");
    assert_eq!(monthly_totals(&txs, Some(10)).len(), 3);
}

#[test]
fn spending_alert_compares_current_month_expenses() {
    let txs = sample();
    let as_of = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();

    assert!(spending_alert(&txs, Decimal::ZERO, as_of).is_none());

    let under = spending_alert(&txs, dec!(100), as_of).unwrap();
    assert_eq!(under.month, "2025-12");
    assert_eq!(under.spent, dec!(61.40));
    assert!(!under.exceeded);

    let at_cap = spending_alert(&txs, dec!(61.40), as_of).unwrap();
    assert!(at_cap.exceeded);

    let other_month = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    let fresh = spending_alert(&txs, dec!(50), other_month).unwrap();
    assert_eq!(fresh.spent, Decimal::ZERO);
    assert!(!fresh.exceeded);
}

#[test]
fn huge_amounts_saturate_instead_of_overflowing() {
    let big = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
    let txs = vec![
        tx(1, big, TransactionKind::Income, "2025-12-01"),
        tx(2, big, TransactionKind::Income, "2025-12-02"),
        tx(3, big, TransactionKind::Expense, "2025-12-03"),
        tx(4, big, TransactionKind::Expense, "2025-12-04"),
    ];

    let s = aggregate_summary(&txs);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(s.income_count, 2);

    let months = monthly_totals(&txs, None);
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].income, Decimal::MAX);

    let alert = spending_alert(&txs, dec!(100), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
        .unwrap();
    assert_eq!(alert.spent, Decimal::MAX);
    assert!(alert.exceeded);

    let mixed = vec![
        tx(1, Decimal::MIN, TransactionKind::Income, "2025-12-01"),
        tx(2, Decimal::MAX, TransactionKind::Expense, "2025-12-02"),
    ];
    assert_eq!(aggregate_summary(&mixed).balance, Decimal::MIN);
}
