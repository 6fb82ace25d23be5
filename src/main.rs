// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use financehub::{cli, commands, config::Config, logging, storage::SqliteStore};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut config = Config::from_env()?;
    if let Some(db) = matches.get_one::<String>("db") {
        config.db_path = PathBuf::from(db);
    }
    let default_level = if matches.subcommand_name() == Some("serve") {
        "info"
    } else {
        "warn"
    };
    logging::init_tracing(config.log_format, default_level);

    let store = SqliteStore::open(&config.db_path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", config.db_path.display());
        }
        Some(("user", sub)) => commands::users::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&store, sub)?,
        Some(("profile", sub)) => commands::profile::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("serve", sub)) => commands::serve::handle(Arc::new(store), config, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
