// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use financehub::models::{NewTransaction, NewUser, TransactionKind};
use financehub::storage::{FinanceStore, SqliteStore};
use financehub::{cli, commands::transactions};
use rust_decimal::Decimal;

fn setup() -> (SqliteStore, i64) {
    let store = SqliteStore::in_memory().unwrap();
    let user = store
        .create_user(&NewUser {
            username: "dev".into(),
            email: "dev@email.com".into(),
            password_hash: "unused".into(),
        })
        .unwrap();
    let rows = [
        ("2025-01-01", "Salary", "5000", TransactionKind::Income, "Work"),
        ("2025-01-02", "Lunch", "-10", TransactionKind::Expense, "Food"),
        ("2025-01-03", "Uber", "15.50", TransactionKind::Expense, "Transport"),
        ("2025-02-01", "Dinner", "45.90", TransactionKind::Expense, "food"),
    ];
    for (date, title, amount, kind, category) in rows {
        store
            .create_transaction(
                user.id,
                &NewTransaction {
                    title: title.into(),
                    amount: amount.parse::<Decimal>().unwrap(),
                    kind,
                    category: category.into(),
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                },
            )
            .unwrap();
    }
    (store, user.id)
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["financehub", "tx", "list", "--user", "dev"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, tx_m) = matches.subcommand().expect("tx subcommand");
    let (_, list_m) = tx_m.subcommand().expect("list subcommand");
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let (store, user_id) = setup();
    let rows = transactions::query_rows(&store, user_id, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.to_string(), "2025-02-01");
}

#[test]
fn list_filters_by_month_kind_and_category() {
    let (store, user_id) = setup();

    let jan = transactions::query_rows(&store, user_id, &list_matches(&["--month", "2025-01"]))
        .unwrap();
    assert_eq!(jan.len(), 3);

    let jan_expenses = transactions::query_rows(
        &store,
        user_id,
        &list_matches(&["--month", "2025-01", "--kind", "expense"]),
    )
    .unwrap();
    let titles: Vec<&str> = jan_expenses.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Uber", "Lunch"]);

    let food = transactions::query_rows(&store, user_id, &list_matches(&["--category", "FOOD"]))
        .unwrap();
    assert_eq!(food.len(), 2);
}

#[test]
fn bad_month_is_rejected() {
    let (store, user_id) = setup();
    let err = transactions::query_rows(&store, user_id, &list_matches(&["--month", "2025-13"]))
        .unwrap_err();
    assert!(err.to_string().contains("Invalid month"));
}
