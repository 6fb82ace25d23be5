// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::required;
use crate::inputs::{ProfileInput, RawAmount};
use crate::storage::FinanceStore;
use crate::utils::{fmt_money, id_for_user, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &dyn FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let user_id = id_for_user(store, required(sub, "user")?)?;
            let input = ProfileInput {
                name: required(sub, "name")?.to_string(),
                email: required(sub, "email")?.to_string(),
                phone: required(sub, "phone")?.to_string(),
                salary: RawAmount::from(required(sub, "salary")?),
                basic_costs: RawAmount::from(required(sub, "basic-costs")?),
                alert_limit: RawAmount::from(required(sub, "alert-limit")?),
            };
            let profile = store.save_profile(user_id, &input.validate()?)?;
            println!("Profile saved for '{}'", profile.name);
        }
        Some(("show", sub)) => {
            let user_id = id_for_user(store, required(sub, "user")?)?;
            let profile = store.get_profile(user_id)?.unwrap_or_default();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &profile)? {
                let rows = vec![
                    vec!["Name".to_string(), profile.name.clone()],
                    vec!["Email".into(), profile.email.clone()],
                    vec!["Phone".into(), profile.phone.clone()],
                    vec!["Salary".into(), fmt_money(&profile.salary)],
                    vec!["Basic costs".into(), fmt_money(&profile.basic_costs)],
                    vec!["Alert limit".into(), fmt_money(&profile.alert_limit)],
                ];
                println!("{}", pretty_table(&["Field", "Value"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
