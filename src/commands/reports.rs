// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::required;
use crate::storage::FinanceStore;
use crate::summary::{aggregate_summary, monthly_totals, spending_alert};
use crate::utils::{fmt_money, id_for_user, maybe_print_json, parse_date, pretty_table, today};
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &dyn FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let txs = store.list_transactions(user_id)?;
    let limit = store
        .get_profile(user_id)?
        .map(|p| p.alert_limit)
        .unwrap_or_default();
    let s = aggregate_summary(&txs);
    let alert = spending_alert(&txs, limit, as_of);

    let out = json!({ "summary": s, "spendingAlert": alert });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        let rows = vec![
            vec![
                "Income".to_string(),
                fmt_money(&s.total_income),
                s.income_count.to_string(),
            ],
            vec![
                "Expense".into(),
                fmt_money(&s.total_expense),
                s.expense_count.to_string(),
            ],
            vec![
                "Balance".into(),
                fmt_money(&s.balance),
                (s.income_count + s.expense_count).to_string(),
            ],
        ];
        println!("{}", pretty_table(&["", "Amount", "Count"], rows));
        if let Some(a) = alert {
            let state = if a.exceeded { "EXCEEDED" } else { "ok" };
            println!(
                "Spending cap {}: {} of {} spent ({})",
                a.month,
                fmt_money(&a.spent),
                fmt_money(&a.limit),
                state
            );
        }
    }
    Ok(())
}

fn monthly(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let months = sub.get_one::<usize>("months").copied();
    let data = monthly_totals(&store.list_transactions(user_id)?, months);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    fmt_money(&m.income),
                    fmt_money(&m.expense),
                    fmt_money(&m.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Balance"], rows)
        );
    }
    Ok(())
}
