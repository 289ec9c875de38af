// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics;
use crate::metrics::breakdown::by_category;
use crate::metrics::ledger::{recent, total_by_kind};
use crate::metrics::portfolio::total_value;
use crate::models::FlowKind;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, require_active_user};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

/// Rows shown under "Recent activity".
pub const RECENT_LIMIT: usize = 5;
/// Entries shown in the spending legend.
pub const LEGEND_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub total: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentRow {
    pub date: String,
    pub kind: String,
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub net_worth: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_investments: Decimal,
    pub top_spending: Vec<LegendEntry>,
    pub recent: Vec<RecentRow>,
}

pub fn build_view(conn: &Connection, owner: &str) -> Result<DashboardView> {
    let txs = store::transactions(conn, owner)?;
    let cats = store::categories(conn, owner)?;
    let holdings = store::investments(conn, owner)?;

    let total_income = total_by_kind(&txs, FlowKind::Income);
    let total_expenses = total_by_kind(&txs, FlowKind::Expense);
    let total_investments = total_value(&holdings);

    // Legend: expense shares ranked by size, top few only. A zero grand
    // total renders as the no-data state, never as a division.
    let b = by_category(&txs, &cats, FlowKind::Expense);
    let top_spending = if b.grand_total.is_zero() {
        Vec::new()
    } else {
        let mut ranked = b.entries.clone();
        ranked.sort_by(|a, z| z.total.cmp(&a.total));
        ranked.truncate(LEGEND_LIMIT);
        ranked
            .into_iter()
            .map(|e| LegendEntry {
                percentage: (e.total * Decimal::ONE_HUNDRED / b.grand_total).round_dp(1),
                name: e.name,
                total: e.total,
            })
            .collect()
    };

    let recent = recent(&txs, RECENT_LIMIT)
        .iter()
        .map(|t| RecentRow {
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            // A dangling or absent category falls back to the kind.
            label: t
                .category_id
                .and_then(|id| cats.iter().find(|c| c.id == id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| t.kind.to_string()),
            amount: t.amount,
        })
        .collect();

    Ok(DashboardView {
        net_worth: metrics::net_worth(total_income, total_expenses, total_investments),
        total_income,
        total_expenses,
        total_investments,
        top_spending,
        recent,
    })
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let owner = require_active_user(conn)?;
    let view = build_view(conn, &owner)?;
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    println!("Net worth: {}", fmt_money(&view.net_worth));
    println!(
        "Income {}  |  Expenses {}  |  Investments {}",
        fmt_money(&view.total_income),
        fmt_money(&view.total_expenses),
        fmt_money(&view.total_investments)
    );

    if view.top_spending.is_empty() {
        println!("No expense data yet");
    } else {
        let rows = view
            .top_spending
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    fmt_money(&e.total),
                    format!("{}%", e.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Top Spending", "Total", "Share"], rows));
    }

    if view.recent.is_empty() {
        println!("No transactions yet");
    } else {
        let rows = view
            .recent
            .iter()
            .map(|r| {
                let signed = match r.kind.as_str() {
                    "income" => format!("+{}", fmt_money(&r.amount)),
                    _ => format!("-{}", fmt_money(&r.amount)),
                };
                vec![r.date.clone(), r.label.clone(), signed]
            })
            .collect();
        println!("{}", pretty_table(&["Recent", "Category", "Amount"], rows));
    }
    Ok(())
}
