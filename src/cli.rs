// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print machine-readable JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(crate_version!())
        .about("Local-first personal expense tracking and spending reports")
        .subcommand(Command::new("init").about("Initialize the local expense database"))
        .subcommand(
            Command::new("expense")
                .about("Record, list and delete expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(
                            Arg::new("amount")
                                .short('a')
                                .long("amount")
                                .required(true)
                                .help("Amount spent, e.g. 12.50"),
                        )
                        .arg(
                            Arg::new("date")
                                .short('d')
                                .long("date")
                                .help("Calendar date YYYY-MM-DD (default: today)"),
                        )
                        .arg(
                            Arg::new("category")
                                .short('c')
                                .long("category")
                                .help("Category, e.g. Food, Transport (default: Food)"),
                        )
                        .arg(
                            Arg::new("method")
                                .short('m')
                                .long("method")
                                .help("Payment method, e.g. cash, credit-card, upi (default: Cash)"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("desc")
                                .help("What this was for"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Only this month, YYYY-MM"),
                        )
                        .arg(Arg::new("category").long("category").help("Only this category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N records"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").required(true).help("Record id")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Spending summaries derived from the ledger")
                .subcommand(json_flags(Command::new("summary").about(
                    "This month, this year and all-time totals",
                )))
                .subcommand(json_flags(
                    Command::new("monthly").about("Total spend per month, most recent first"),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Spend per category for one month, largest first")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Month YYYY-MM (default: current month)"),
                        ),
                )),
        )
}
