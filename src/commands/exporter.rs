// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::required;
use crate::storage::FinanceStore;
use crate::utils::id_for_user;
use anyhow::{bail, Result};

pub fn handle(store: &dyn FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    // oldest first, as a ledger reads
    let mut txs = store.list_transactions(user_id)?;
    txs.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "title", "kind", "amount", "category"])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.title.clone(),
                    t.kind.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
