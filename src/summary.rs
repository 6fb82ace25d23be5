// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard figures derived from a user's transactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{MonthlyTotals, SpendingAlert, Summary, Transaction, TransactionKind};
use crate::utils::month_key;

/// Totals and counts per kind plus the net balance. Amounts are taken as
/// stored; a negative expense lowers the expense total. Sums saturate at
/// the `Decimal` range instead of overflowing.
pub fn aggregate_summary(transactions: &[Transaction]) -> Summary {
    let mut s = Summary::default();
    for t in transactions {
        match t.kind {
            TransactionKind::Income => {
                s.total_income = s.total_income.saturating_add(t.amount);
                s.income_count += 1;
            }
            TransactionKind::Expense => {
                s.total_expense = s.total_expense.saturating_add(t.amount);
                s.expense_count += 1;
            }
        }
    }
    s.balance = s.total_income.saturating_sub(s.total_expense);
    s
}

/// Per-month income/expense, oldest month first. With `limit`, only the
/// most recent `limit` months are returned.
pub fn monthly_totals(transactions: &[Transaction], limit: Option<usize>) -> Vec<MonthlyTotals> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let entry = map
            .entry(month_key(t.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.kind {
            TransactionKind::Income => entry.0 = entry.0.saturating_add(t.amount),
            TransactionKind::Expense => entry.1 = entry.1.saturating_add(t.amount),
        }
    }
    let skip = limit.map_or(0, |n| map.len().saturating_sub(n));
    map.into_iter()
        .skip(skip)
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
            balance: income.saturating_sub(expense),
        })
        .collect()
}

/// Compare the expenses of the month containing `as_of` with the profile's
/// monthly cap. `None` when no cap is configured.
pub fn spending_alert(
    transactions: &[Transaction],
    limit: Decimal,
    as_of: NaiveDate,
) -> Option<SpendingAlert> {
    if limit <= Decimal::ZERO {
        return None;
    }
    let month = month_key(as_of);
    let spent = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && month_key(t.date) == month)
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount));
    Some(SpendingAlert {
        month,
        spent,
        limit,
        exceeded: spent >= limit,
    })
}
