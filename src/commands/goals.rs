// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::required;
use crate::goals::project_goal;
use crate::inputs::{GoalInput, RawAmount};
use crate::storage::FinanceStore;
use crate::utils::{fmt_money, id_for_user, maybe_print_json, parse_date, pretty_table, today};
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &dyn FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let input = GoalInput {
        title: required(sub, "title")?.to_string(),
        target_amount: RawAmount::from(required(sub, "target")?),
        current_amount: RawAmount::from(required(sub, "current")?),
        deadline: sub.get_one::<String>("deadline").cloned(),
    };
    let goal = store.save_goal(user_id, &input.validate()?)?;
    let deadline = goal
        .deadline
        .map(|d| d.to_string())
        .unwrap_or_else(|| "none".into());
    println!(
        "Goal '{}' set: {} of {} (deadline {})",
        goal.title,
        fmt_money(&goal.current_amount),
        fmt_money(&goal.target_amount),
        deadline
    );
    Ok(())
}

fn show(store: &dyn FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = id_for_user(store, required(sub, "user")?)?;
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let goal = store.get_goal(user_id)?.unwrap_or_default();
    let metrics = project_goal(&goal, as_of);

    let out = json!({ "goal": goal, "metrics": metrics });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        let rows = vec![
            vec!["Title".to_string(), goal.title.clone()],
            vec!["Target".into(), fmt_money(&goal.target_amount)],
            vec!["Current".into(), fmt_money(&goal.current_amount)],
            vec![
                "Deadline".into(),
                goal.deadline.map(|d| d.to_string()).unwrap_or_default(),
            ],
            vec![
                "Progress".into(),
                format!("{:.1}%", metrics.percent_complete),
            ],
            vec!["Remaining".into(), fmt_money(&metrics.amount_remaining)],
            vec![
                "Monthly saving".into(),
                fmt_money(&metrics.monthly_contribution),
            ],
        ];
        let header = format!("as of {}", as_of);
        println!("{}", pretty_table(&["Goal", header.as_str()], rows));
    }
    Ok(())
}
