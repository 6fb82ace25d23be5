// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .short('u')
        .required(true)
        .help("Username that owns the data")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn as_of_arg() -> Arg {
    Arg::new("as-of")
        .long("as-of")
        .help("Reference date YYYY-MM-DD (default: today)")
}

pub fn build_cli() -> Command {
    Command::new("financehub")
        .version(clap::crate_version!())
        .about("Personal finance tracker: transactions, savings goal and dashboard API")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("SQLite database file (overrides FINANCEHUB_DB_PATH)"),
        )
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(
            Command::new("user")
                .about("Manage users")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("username").required(true))
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(Command::new("list").args(json_args())),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .arg(user_arg())
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (default: today)"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .arg(user_arg())
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm").arg(user_arg()).arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goal")
                .subcommand(
                    Command::new("set")
                        .arg(user_arg())
                        .arg(Arg::new("title").long("title").default_value(""))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0"))
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .help("YYYY-MM-DD; omit for no deadline"),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .arg(user_arg())
                        .arg(as_of_arg())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("Personal data and monthly spending cap")
                .subcommand(
                    Command::new("set")
                        .arg(user_arg())
                        .arg(Arg::new("name").long("name").default_value(""))
                        .arg(Arg::new("email").long("email").default_value(""))
                        .arg(Arg::new("phone").long("phone").default_value(""))
                        .arg(Arg::new("salary").long("salary").default_value("0"))
                        .arg(
                            Arg::new("basic-costs")
                                .long("basic-costs")
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("alert-limit")
                                .long("alert-limit")
                                .default_value("0"),
                        ),
                )
                .subcommand(Command::new("show").arg(user_arg()).args(json_args())),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard figures")
                .subcommand(
                    Command::new("summary")
                        .arg(user_arg())
                        .arg(as_of_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("monthly")
                        .arg(user_arg())
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .default_value("12"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to a file")
                .subcommand(
                    Command::new("transactions")
                        .arg(user_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_parser(["csv", "json"]),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("serve").about("Run the REST API").arg(
                Arg::new("addr")
                    .long("addr")
                    .help("Listen address (overrides FINANCEHUB_LISTEN_ADDR)"),
            ),
        )
}

/// Value of an argument clap already guarantees to be present.
pub fn required<'a>(m: &'a ArgMatches, id: &str) -> Result<&'a str> {
    m.get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("Missing --{}", id))
}
