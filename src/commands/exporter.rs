// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::require_active_user;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT t.date, t.kind, t.amount, c.name as category, t.description
         FROM transactions t
         LEFT JOIN categories c ON t.category_id=c.id
         WHERE t.user_email=?1
         ORDER BY t.date, t.id",
    )?;
    let rows = stmt.query_map(params![owner], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
            r.get::<_, Option<String>>(4)?,
        ))
    })?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "kind", "amount", "category", "description"])?;
            for row in rows {
                let (d, k, amt, cat, desc) = row?;
                wtr.write_record([
                    d,
                    k,
                    amt,
                    cat.unwrap_or_default(),
                    desc.unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (d, k, amt, cat, desc) = row?;
                items.push(json!({
                    "date": d, "kind": k, "amount": amt, "category": cat, "description": desc
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => anyhow::bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
