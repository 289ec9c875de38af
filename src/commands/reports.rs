// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::breakdown::by_category;
use crate::metrics::ledger::monthly_buckets;
use crate::metrics::portfolio::{illustrative_series, total_value, SERIES_STEPS};
use crate::models::FlowKind;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, month_label, pretty_table, require_active_user};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    match m.subcommand() {
        Some(("cashflow", sub)) => cashflow(conn, &owner, sub)?,
        Some(("breakdown", sub)) => breakdown(conn, &owner, sub)?,
        Some(("portfolio", sub)) => portfolio(conn, &owner, sub)?,
        _ => {}
    }
    Ok(())
}

fn cashflow(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = store::transactions(conn, owner)?;
    let buckets = monthly_buckets(&txs);
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        if buckets.is_empty() {
            println!("No transactions yet");
            return Ok(());
        }
        let rows = buckets
            .iter()
            .map(|b| {
                vec![
                    month_label(&b.month),
                    fmt_money(&b.income),
                    fmt_money(&b.expenses),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));
    }
    Ok(())
}

fn breakdown(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = match sub.get_one::<String>("kind") {
        Some(raw) => FlowKind::parse(raw)?,
        None => FlowKind::Expense,
    };
    let txs = store::transactions(conn, owner)?;
    let cats = store::categories(conn, owner)?;
    let b = by_category(&txs, &cats, kind);
    if maybe_print_json(json_flag, jsonl_flag, &b)? {
        return Ok(());
    }
    if b.grand_total.is_zero() {
        println!("No {} data yet", kind);
        return Ok(());
    }
    let rows = b
        .entries
        .iter()
        .map(|e| {
            let share = (e.total * Decimal::ONE_HUNDRED / b.grand_total).round_dp(1);
            vec![e.name.clone(), fmt_money(&e.total), format!("{}%", share)]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Total", "Share"], rows));
    println!("Total: {}", fmt_money(&b.grand_total));
    Ok(())
}

#[derive(Serialize)]
struct PortfolioReport {
    total_value: Decimal,
    series: Vec<crate::metrics::portfolio::IllustrativePoint>,
}

fn portfolio(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let steps = sub
        .get_one::<usize>("steps")
        .copied()
        .unwrap_or(SERIES_STEPS);
    let holdings = store::investments(conn, owner)?;
    let report = PortfolioReport {
        total_value: total_value(&holdings),
        series: illustrative_series(&holdings, steps),
    };
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }
    if holdings.is_empty() {
        println!("No investments yet");
        return Ok(());
    }
    println!("Portfolio value: {}", fmt_money(&report.total_value));
    println!("Illustrative growth curve (not historical data):");
    let rows = report
        .series
        .iter()
        .map(|p| {
            vec![
                format!("{}", p.step + 1),
                format!("x{}", p.multiplier),
                fmt_money(&p.total),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Step", "Multiplier", "Total"], rows));
    Ok(())
}
