// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{parse_amount, AssetKind};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, require_active_user};
use anyhow::Result;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    match m.subcommand() {
        Some(("add", sub)) => add(conn, &owner, sub)?,
        Some(("list", sub)) => list(conn, &owner, sub)?,
        Some(("update", sub)) => update(conn, &owner, sub)?,
        Some(("rm", sub)) => rm(conn, &owner, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let kind = AssetKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let name = sub
        .get_one::<String>("name")
        .map(|s| s.trim().to_string())
        .unwrap();
    let value = parse_amount(sub.get_one::<String>("value").unwrap())?;
    if value < Decimal::ZERO {
        anyhow::bail!("Current value must be non-negative");
    }
    let symbol = sub.get_one::<String>("symbol").map(|s| s.trim().to_string());
    let notes = sub.get_one::<String>("notes").map(|s| s.to_string());
    conn.execute(
        "INSERT INTO investments(user_email, kind, name, symbol, current_value, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![owner, kind.as_str(), name, symbol, value.to_string(), notes],
    )?;
    println!("Added {} holding '{}' at {}", kind, name, fmt_money(&value));
    Ok(())
}

fn list(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let holdings = store::investments(conn, owner)?;
    if !maybe_print_json(json_flag, jsonl_flag, &holdings)? {
        let rows = holdings
            .iter()
            .map(|h| {
                vec![
                    h.id.to_string(),
                    h.kind.to_string(),
                    h.name.clone(),
                    h.symbol.clone().unwrap_or_default(),
                    fmt_money(&h.current_value),
                    h.updated_at.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Kind", "Name", "Symbol", "Value", "Updated"], rows)
        );
    }
    Ok(())
}

fn update(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let value = parse_amount(sub.get_one::<String>("value").unwrap())?;
    if value < Decimal::ZERO {
        anyhow::bail!("Current value must be non-negative");
    }
    let n = conn.execute(
        "UPDATE investments SET current_value=?1, updated_at=datetime('now')
         WHERE user_email=?2 AND id=?3",
        params![value.to_string(), owner, id],
    )?;
    if n == 0 {
        anyhow::bail!("Investment #{} not found", id);
    }
    println!("Re-valued holding #{} at {}", id, fmt_money(&value));
    Ok(())
}

fn rm(conn: &Connection, owner: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute(
        "DELETE FROM investments WHERE user_email=?1 AND id=?2",
        params![owner, id],
    )?;
    if n == 0 {
        anyhow::bail!("Investment #{} not found", id);
    }
    println!("Removed holding #{}", id);
    Ok(())
}
