// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{parse_amount, FlowKind};
use crate::utils::{
    fmt_money, id_for_category, maybe_print_json, parse_date, parse_month, pretty_table,
    require_active_user,
};
use anyhow::Result;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    let kind = FlowKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    if amount < Decimal::ZERO {
        anyhow::bail!("Amount must be non-negative; the kind carries the direction");
    }
    let date = match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw.trim())?,
        None => chrono::Local::now().date_naive(),
    };
    let description = sub.get_one::<String>("description").map(|s| s.to_string());

    let category_id = match sub.get_one::<String>("category") {
        Some(name) => {
            let id = id_for_category(conn, &owner, name.trim())?;
            let cat_kind: String = conn.query_row(
                "SELECT kind FROM categories WHERE id=?1",
                params![id],
                |r| r.get(0),
            )?;
            if cat_kind != kind.as_str() {
                println!(
                    "Warning: category '{}' is {}, but this transaction is {}",
                    name.trim(),
                    cat_kind,
                    kind
                );
            }
            Some(id)
        }
        None => None,
    };

    conn.execute(
        "INSERT INTO transactions(user_email, category_id, kind, amount, description, date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            owner,
            category_id,
            kind.as_str(),
            amount.to_string(),
            description,
            date.to_string()
        ],
    )?;
    println!("Recorded {} of {} on {}", kind, fmt_money(&amount), date);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let owner = require_active_user(conn)?;
    let data = query_rows(conn, &owner, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Amount", "Category", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute(
        "DELETE FROM transactions WHERE user_email=?1 AND id=?2",
        params![owner, id],
    )?;
    if n == 0 {
        anyhow::bail!("Transaction #{} not found", id);
    }
    println!("Removed transaction #{}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

pub fn query_rows(
    conn: &Connection,
    owner: &str,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.date, t.kind, t.amount, c.name, t.description
         FROM transactions t LEFT JOIN categories c ON t.category_id=c.id
         WHERE t.user_email=?",
    );
    let mut params_vec: Vec<String> = vec![owner.to_string()];

    if let Some(kind) = sub.get_one::<String>("kind") {
        sql.push_str(" AND t.kind=?");
        params_vec.push(FlowKind::parse(kind)?.as_str().to_string());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND c.name=?");
        params_vec.push(cat.into());
    }
    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(t.date,1,7)=?");
        params_vec.push(parse_month(month.trim())?);
    }
    sql.push_str(" ORDER BY t.date DESC, t.created_at DESC, t.id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> = params_vec
        .iter()
        .map(|s| s as &dyn rusqlite::ToSql)
        .collect();
    let mut rows = stmt.query(rusqlite::params_from_iter(params))?;

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let kind: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let category: Option<String> = r.get(4)?;
        let description: Option<String> = r.get(5)?;
        data.push(TransactionRow {
            id,
            date,
            kind,
            amount,
            category: category.unwrap_or_else(|| "(uncategorized)".into()),
            description: description.unwrap_or_default(),
        });
    }
    Ok(data)
}
