// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::goals::{budget_statuses, target_status, BudgetGoalStatus, BudgetStanding};
use crate::metrics::portfolio::total_value;
use crate::models::{parse_amount, DomainError};
use crate::store;
use crate::utils::{fmt_money, id_for_category, maybe_print_json, pretty_table, require_active_user};
use anyhow::Result;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    match m.subcommand() {
        Some(("set", sub)) => set(conn, &owner, sub)?,
        Some(("list", sub)) => list(conn, &owner, sub)?,
        Some(("progress", sub)) => progress(conn, &owner, sub)?,
        Some(("target", sub)) => target(conn, &owner, sub)?,
        Some(("rm", sub)) => rm(conn, &owner, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let cat = sub.get_one::<String>("category").unwrap().trim().to_string();
    let limit = parse_amount(sub.get_one::<String>("limit").unwrap())?;
    if limit <= Decimal::ZERO {
        return Err(DomainError::NonPositiveLimit(limit).into());
    }
    let cat_id = id_for_category(conn, owner, &cat)?;
    let cat_kind: String = conn.query_row(
        "SELECT kind FROM categories WHERE id=?1",
        params![cat_id],
        |r| r.get(0),
    )?;
    if cat_kind == "income" {
        println!(
            "Warning: '{}' is an income category; budget goals track expense spend",
            cat
        );
    }
    conn.execute(
        "INSERT INTO goals(user_email, category_id, limit_amount) VALUES (?1,?2,?3)
         ON CONFLICT(user_email, category_id) DO UPDATE SET limit_amount=excluded.limit_amount",
        params![owner, cat_id, limit.to_string()],
    )?;
    println!("Goal set for '{}' = {}/month", cat, fmt_money(&limit));
    Ok(())
}

fn list(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = store::goals(conn, owner)?;
    if !maybe_print_json(json_flag, jsonl_flag, &goals)? {
        let cats = store::categories(conn, owner)?;
        let rows = goals
            .iter()
            .map(|g| {
                let name = cats
                    .iter()
                    .find(|c| c.id == g.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| {
                        crate::metrics::goals::MISSING_CATEGORY_LABEL.to_string()
                    });
                vec![g.id.to_string(), name, fmt_money(&g.limit_amount)]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Category", "Monthly Limit"], rows));
    }
    Ok(())
}

/// Spend-to-limit statuses for the owner's goals, straight off the
/// current snapshot.
pub fn progress_rows(conn: &Connection, owner: &str) -> Result<Vec<BudgetGoalStatus>> {
    let goals = store::goals(conn, owner)?;
    let txs = store::transactions(conn, owner)?;
    let cats = store::categories(conn, owner)?;
    Ok(budget_statuses(&goals, &txs, &cats)?)
}

/// Reconcile each goal's stored alert flag with its computed standing.
/// Returns the ids of goals that just crossed into over-budget; a goal
/// that drops back under budget has its flag cleared so a later overage
/// alerts again.
pub fn sync_alerts(
    conn: &Connection,
    owner: &str,
    statuses: &[BudgetGoalStatus],
) -> Result<Vec<i64>> {
    let mut fresh = Vec::new();
    for s in statuses {
        let over = s.standing == BudgetStanding::OverBudget;
        let was: bool = conn.query_row(
            "SELECT alert_triggered FROM goals WHERE user_email=?1 AND id=?2",
            params![owner, s.goal_id],
            |r| r.get(0),
        )?;
        if over && !was {
            fresh.push(s.goal_id);
        }
        if over != was {
            conn.execute(
                "UPDATE goals SET alert_triggered=?1 WHERE user_email=?2 AND id=?3",
                params![over, owner, s.goal_id],
            )?;
        }
    }
    Ok(fresh)
}

fn progress(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let statuses = progress_rows(conn, owner)?;
    let fresh = sync_alerts(conn, owner, &statuses)?;
    if !maybe_print_json(json_flag, jsonl_flag, &statuses)? {
        let rows = statuses
            .iter()
            .map(|s| {
                let note = match s.standing {
                    BudgetStanding::OverBudget => {
                        format!("{} over budget", fmt_money(&s.overage()))
                    }
                    BudgetStanding::UnderBudget => format!("{} left", fmt_money(&s.left())),
                };
                vec![
                    s.category_name.clone(),
                    fmt_money(&s.limit),
                    fmt_money(&s.spent),
                    format!("{:.1}%", s.percentage),
                    s.standing.as_str().to_string(),
                    note,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Limit", "Spent", "Used", "Status", "Note"],
                rows,
            )
        );
        for id in &fresh {
            if let Some(s) = statuses.iter().find(|s| s.goal_id == *id) {
                println!(
                    "ALERT: '{}' went over budget ({} past the limit)",
                    s.category_name,
                    fmt_money(&s.overage())
                );
            }
        }
    }
    Ok(())
}

fn target(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let holdings = store::investments(conn, owner)?;
    let status = target_status(total_value(&holdings), amount)?;
    if !maybe_print_json(json_flag, jsonl_flag, &status)? {
        let rows = vec![vec![
            fmt_money(&status.target),
            fmt_money(&status.total),
            format!("{:.1}%", status.percentage),
            fmt_money(&status.remaining),
            status.standing.as_str().to_string(),
        ]];
        println!(
            "{}",
            pretty_table(
                &["Target", "Invested", "Progress", "Remaining", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute(
        "DELETE FROM goals WHERE user_email=?1 AND id=?2",
        params![owner, id],
    )?;
    if n == 0 {
        anyhow::bail!("Goal #{} not found", id);
    }
    println!("Removed goal #{}", id);
    Ok(())
}
