// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, value_parser, Command};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print JSON instead of a table"))
        .arg(arg!(--jsonl "Print JSON Lines instead of a table"))
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Personal income, expense, investment, and budget-goal tracker")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("user")
                .about("Manage the active profile")
                .subcommand(
                    Command::new("set")
                        .about("Set the active profile e-mail")
                        .arg(arg!(<EMAIL> "Profile e-mail address")),
                )
                .subcommand(Command::new("show").about("Show the active profile")),
        )
        .subcommand(
            Command::new("category")
                .about("Manage income and expense categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(
                            arg!(--kind <KIND> "Category kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(arg!(--name <NAME> "Category name").required(true))
                        .arg(arg!(--icon <ICON> "Icon token from the fixed set"))
                        .arg(arg!(--color <COLOR> "Display color as #RRGGBB")),
                )
                .subcommand(with_json_flags(
                    Command::new("list").about("List categories"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category by name")
                        .arg(arg!(--name <NAME> "Category name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            arg!(--kind <KIND> "Transaction kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(
                            arg!(--amount <AMOUNT> "Non-negative decimal amount")
                                .required(true)
                                .allow_negative_numbers(true),
                        )
                        .arg(arg!(--date <DATE> "Date as YYYY-MM-DD (defaults to today)"))
                        .arg(arg!(--category <NAME> "Category name"))
                        .arg(arg!(--description <TEXT> "Free-form description")),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            arg!(--kind <KIND> "Only this kind")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(arg!(--category <NAME> "Only this category"))
                        .arg(arg!(--month <MONTH> "Only this month (YYYY-MM)"))
                        .arg(
                            arg!(--limit <N> "Keep only the newest N rows")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a transaction")
                        .arg(
                            arg!(--id <ID> "Transaction id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("investment")
                .about("Track manually valued holdings")
                .subcommand(
                    Command::new("add")
                        .about("Add a holding")
                        .arg(
                            arg!(--kind <KIND> "Holding kind")
                                .required(true)
                                .value_parser(["crypto", "stock", "business"]),
                        )
                        .arg(arg!(--name <NAME> "Holding name").required(true))
                        .arg(arg!(--value <VALUE> "Current value").required(true))
                        .arg(arg!(--symbol <SYMBOL> "Ticker or symbol"))
                        .arg(arg!(--notes <TEXT> "Free-form notes")),
                )
                .subcommand(with_json_flags(
                    Command::new("list").about("List holdings, most recently updated first"),
                ))
                .subcommand(
                    Command::new("update")
                        .about("Re-value a holding")
                        .arg(
                            arg!(--id <ID> "Holding id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(arg!(--value <VALUE> "New current value").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a holding")
                        .arg(
                            arg!(--id <ID> "Holding id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Budget goals and the portfolio target")
                .subcommand(
                    Command::new("set")
                        .about("Set (or update) the monthly limit for a category")
                        .arg(arg!(--category <NAME> "Expense category name").required(true))
                        .arg(arg!(--limit <AMOUNT> "Positive monthly ceiling").required(true)),
                )
                .subcommand(with_json_flags(Command::new("list").about("List goals")))
                .subcommand(with_json_flags(
                    Command::new("progress").about("Spend-to-limit status per goal"),
                ))
                .subcommand(with_json_flags(
                    Command::new("target")
                        .about("Progress of the portfolio toward a target value")
                        .arg(arg!(--amount <AMOUNT> "Positive target value").required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a goal")
                        .arg(
                            arg!(--id <ID> "Goal id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(with_json_flags(
            Command::new("dashboard").about("Net worth, top spending, and recent activity"),
        ))
        .subcommand(
            Command::new("report")
                .about("Aggregate views")
                .subcommand(with_json_flags(
                    Command::new("cashflow").about("Monthly income vs expenses, last six months"),
                ))
                .subcommand(with_json_flags(
                    Command::new("breakdown")
                        .about("Per-category totals and percentage shares")
                        .arg(
                            arg!(--kind <KIND> "Flow kind to break down")
                                .value_parser(["income", "expense"]),
                        ),
                ))
                .subcommand(with_json_flags(
                    Command::new("portfolio")
                        .about("Portfolio value and an illustrative growth curve")
                        .arg(
                            arg!(--steps <N> "Points in the illustrative curve")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Export the owner's transactions")
                        .arg(arg!(--format <FORMAT> "Output format: csv or json").required(true))
                        .arg(arg!(--out <PATH> "Destination file").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Scan the owner's data for inconsistencies"))
}
