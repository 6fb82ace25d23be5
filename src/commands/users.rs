// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::cli::required;
use crate::inputs::RegisterInput;
use crate::storage::FinanceStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &dyn FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let input = RegisterInput {
                username: required(sub, "username")?.to_string(),
                email: required(sub, "email")?.to_string(),
                password: required(sub, "password")?.to_string(),
            };
            let user = auth::register(store, &input)?;
            println!("Added user '{}' <{}> (id {})", user.username, user.email, user.id);
        }
        Some(("list", sub)) => {
            let users = store.list_users()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &users)? {
                let rows = users
                    .into_iter()
                    .map(|u| {
                        vec![
                            u.id.to_string(),
                            u.username,
                            u.email,
                            if u.is_active { "yes" } else { "no" }.to_string(),
                            u.created_at,
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["ID", "Username", "Email", "Active", "Created"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
