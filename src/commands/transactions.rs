// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::required;
use crate::inputs::{RawAmount, TransactionInput};
use crate::models::{Transaction, TransactionFilter, TransactionKind};
use crate::storage::FinanceStore;
use crate::utils::{fmt_money, id_for_user, maybe_print_json, parse_month, pretty_table, today};
use anyhow::{bail, Result};

pub fn handle(store: &dyn FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let username = required(sub, "user")?;
    let user_id = id_for_user(store, username)?;
    let input = TransactionInput {
        title: required(sub, "title")?.to_string(),
        amount: RawAmount::from(required(sub, "amount")?),
        kind: required(sub, "kind")?.to_string(),
        category: sub.get_one::<String>("category").cloned(),
        date: sub.get_one::<String>("date").cloned(),
    };
    let tx = store.create_transaction(user_id, &input.validate(today())?)?;
    println!(
        "Recorded {} {} '{}' on {} (id {})",
        tx.kind,
        fmt_money(&tx.amount),
        tx.title,
        tx.date,
        tx.id
    );
    Ok(())
}

fn list(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let data = query_rows(store, user_id, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.title.clone(),
                    t.kind.to_string(),
                    fmt_money(&t.amount),
                    t.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Title", "Kind", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

fn remove(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let Some(id) = sub.get_one::<i64>("id").copied() else {
        bail!("Missing --id");
    };
    if !store.delete_transaction(user_id, id)? {
        bail!("Transaction {} not found", id);
    }
    println!("Removed transaction {}", id);
    Ok(())
}

/// The user's transactions, newest first, narrowed by the `list` filters.
pub fn query_rows(
    store: &dyn FinanceStore,
    user_id: i64,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let filter = TransactionFilter {
        month: sub.get_one::<String>("month").map(|m| parse_month(m)).transpose()?,
        kind: sub
            .get_one::<String>("kind")
            .map(|k| k.parse::<TransactionKind>())
            .transpose()?,
        category: sub.get_one::<String>("category").cloned(),
        limit: sub.get_one::<usize>("limit").copied(),
    };
    Ok(store.query_transactions(user_id, &filter)?)
}
