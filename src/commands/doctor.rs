// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{pretty_table, require_active_user};
use anyhow::Result;
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection) -> Result<()> {
    let owner = require_active_user(conn)?;
    let rows = findings(conn, &owner)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Owner-scoped integrity scan. Each finding is an (issue, detail) row;
/// none of them stop the program, they only surface drift the schema
/// cannot (or deliberately does not) prevent.
pub fn findings(conn: &Connection, owner: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Transactions pointing at a category that no longer exists.
    let mut stmt = conn.prepare(
        "SELECT t.id FROM transactions t LEFT JOIN categories c ON t.category_id=c.id
         WHERE t.user_email=?1 AND t.category_id IS NOT NULL AND c.id IS NULL",
    )?;
    let mut cur = stmt.query(params![owner])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec![
            "tx_missing_category".into(),
            format!("transaction #{}", id),
        ]);
    }

    // 2) Transactions booked against a category of the opposite kind.
    let mut stmt2 = conn.prepare(
        "SELECT t.id, t.kind, c.name, c.kind
         FROM transactions t JOIN categories c ON t.category_id=c.id
         WHERE t.user_email=?1 AND t.kind != c.kind",
    )?;
    let mut cur2 = stmt2.query(params![owner])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let tkind: String = r.get(1)?;
        let cname: String = r.get(2)?;
        let ckind: String = r.get(3)?;
        rows.push(vec![
            "kind_mismatch".into(),
            format!("transaction #{} is {} but '{}' is {}", id, tkind, cname, ckind),
        ]);
    }

    // 3) Goals whose category is gone (no FK on purpose).
    let mut stmt3 = conn.prepare(
        "SELECT g.id FROM goals g LEFT JOIN categories c ON g.category_id=c.id
         WHERE g.user_email=?1 AND c.id IS NULL",
    )?;
    let mut cur3 = stmt3.query(params![owner])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["goal_missing_category".into(), format!("goal #{}", id)]);
    }

    // 4) Goals watching an income category; spend tracking is expense-only.
    let mut stmt4 = conn.prepare(
        "SELECT g.id, c.name FROM goals g JOIN categories c ON g.category_id=c.id
         WHERE g.user_email=?1 AND c.kind='income'",
    )?;
    let mut cur4 = stmt4.query(params![owner])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        rows.push(vec![
            "goal_on_income_category".into(),
            format!("goal #{} watches '{}'", id, name),
        ]);
    }

    // 5) Stored limits the progress computation would reject.
    let mut stmt5 = conn.prepare(
        "SELECT id, limit_amount FROM goals
         WHERE user_email=?1 AND CAST(limit_amount AS REAL) <= 0",
    )?;
    let mut cur5 = stmt5.query(params![owner])?;
    while let Some(r) = cur5.next()? {
        let id: i64 = r.get(0)?;
        let limit: String = r.get(1)?;
        rows.push(vec![
            "non_positive_goal_limit".into(),
            format!("goal #{} has limit {}", id, limit),
        ]);
    }

    // 6) Negative stored amounts; direction belongs to the kind column.
    let mut stmt6 = conn.prepare(
        "SELECT id, amount FROM transactions
         WHERE user_email=?1 AND CAST(amount AS REAL) < 0",
    )?;
    let mut cur6 = stmt6.query(params![owner])?;
    while let Some(r) = cur6.next()? {
        let id: i64 = r.get(0)?;
        let amount: String = r.get(1)?;
        rows.push(vec![
            "negative_amount".into(),
            format!("transaction #{} has amount {}", id, amount),
        ]);
    }

    Ok(rows)
}
