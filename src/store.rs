// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::models::{parse_amount, AssetKind, Category, FlowKind, Goal, Investment, Transaction};

pub fn categories(conn: &Connection, owner: &str) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, name, icon, color FROM categories WHERE user_email=?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![owner], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, kind, name, icon, color) = row?;
        out.push(Category {
            id,
            kind: FlowKind::parse(&kind)
                .with_context(|| format!("Bad stored kind on category #{}", id))?,
            name,
            icon,
            color,
        });
    }
    Ok(out)
}

/// Snapshot of the owner's transactions, newest first (date, then
/// creation order). Consumers that take a "recent" prefix rely on this
/// ordering and must not re-sort.
pub fn transactions(conn: &Connection, owner: &str) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, amount, description, date, category_id
         FROM transactions WHERE user_email=?1
         ORDER BY date DESC, created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![owner], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
            r.get::<_, NaiveDate>(4)?,
            r.get::<_, Option<i64>>(5)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, kind, amount, description, date, category_id) = row?;
        out.push(Transaction {
            id,
            kind: FlowKind::parse(&kind)
                .with_context(|| format!("Bad stored kind on transaction #{}", id))?,
            amount: parse_amount(&amount)
                .with_context(|| format!("Bad stored amount on transaction #{}", id))?,
            description,
            date,
            category_id,
        });
    }
    Ok(out)
}

pub fn investments(conn: &Connection, owner: &str) -> Result<Vec<Investment>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, name, symbol, current_value, notes, updated_at
         FROM investments WHERE user_email=?1
         ORDER BY updated_at DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![owner], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
            r.get::<_, String>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, kind, name, symbol, current_value, notes, updated_at) = row?;
        out.push(Investment {
            id,
            kind: AssetKind::parse(&kind)
                .with_context(|| format!("Bad stored kind on investment #{}", id))?,
            name,
            symbol,
            current_value: parse_amount(&current_value)
                .with_context(|| format!("Bad stored value on investment #{}", id))?,
            notes,
            updated_at,
        });
    }
    Ok(out)
}

pub fn goals(conn: &Connection, owner: &str) -> Result<Vec<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT id, category_id, limit_amount, alert_triggered
         FROM goals WHERE user_email=?1
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![owner], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, bool>(3)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, category_id, limit_amount, alert_triggered) = row?;
        out.push(Goal {
            id,
            category_id,
            limit_amount: parse_amount(&limit_amount)
                .with_context(|| format!("Bad stored limit on goal #{}", id))?,
            alert_triggered,
        });
    }
    Ok(out)
}
