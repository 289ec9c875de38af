// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

/// Icons a category may carry. Mirrors the fixed picker set of the app;
/// `question-circle` doubles as the default.
pub const ICON_SET: &[&str] = &[
    "home",
    "utensils",
    "car",
    "gamepad",
    "shopping-cart",
    "heartbeat",
    "graduation-cap",
    "dollar-sign",
    "briefcase",
    "gift",
    "question-circle",
];

static COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("color regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    // Length check keeps the zero padding bucket keys rely on.
    let shaped = s.len() == 7 && s.as_bytes()[4] == b'-';
    if !shaped || chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").is_err() {
        anyhow::bail!("Invalid month '{}', expected YYYY-MM", s);
    }
    Ok(s.to_string())
}

pub fn parse_icon(s: &str) -> Result<String> {
    if ICON_SET.contains(&s) {
        Ok(s.to_string())
    } else {
        anyhow::bail!("Unknown icon '{}', expected one of: {}", s, ICON_SET.join(", "))
    }
}

pub fn parse_color(s: &str) -> Result<String> {
    if COLOR_RE.is_match(s) {
        Ok(s.to_string())
    } else {
        anyhow::bail!("Invalid color '{}', expected #RRGGBB", s)
    }
}

pub fn parse_email(s: &str) -> Result<String> {
    if EMAIL_RE.is_match(s) {
        Ok(s.to_string())
    } else {
        anyhow::bail!("Invalid e-mail address '{}'", s)
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${:.2}", d)
}

/// Human label for a YYYY-MM bucket key, e.g. "2025-03" -> "Mar 2025".
/// Labels are display-only; ordering always happens on the key.
pub fn month_label(key: &str) -> String {
    match chrono::NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d") {
        Ok(d) => d.format("%b %Y").to_string(),
        Err(_) => key.to_string(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Active profile settings. Every data command is scoped to this e-mail.
pub fn get_active_user(conn: &Connection) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='active_user'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn require_active_user(conn: &Connection) -> Result<String> {
    get_active_user(conn)?
        .context("No active profile. Run `fintrack user set <email>` first")
}

pub fn set_active_user(conn: &Connection, email: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('active_user', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![email],
    )?;
    Ok(())
}

pub fn id_for_category(conn: &Connection, owner: &str, name: &str) -> Result<i64> {
    let mut stmt = conn.prepare("SELECT id FROM categories WHERE user_email=?1 AND name=?2")?;
    let id: i64 = stmt
        .query_row(params![owner, name], |r| r.get(0))
        .with_context(|| format!("Category '{}' not found", name))?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tokens() {
        assert!(parse_color("#EF4444").is_ok());
        assert!(parse_color("#10b981").is_ok());
        assert!(parse_color("EF4444").is_err());
        assert!(parse_color("#EF444").is_err());
        assert!(parse_color("#EF44445").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(parse_email("ada@example.com").is_ok());
        assert!(parse_email("not-an-email").is_err());
        assert!(parse_email("two@at@signs.com").is_err());
    }

    #[test]
    fn icons_come_from_the_fixed_set() {
        assert_eq!(parse_icon("utensils").unwrap(), "utensils");
        assert!(parse_icon("rocket").is_err());
    }

    #[test]
    fn months_validate() {
        assert_eq!(parse_month("2025-02").unwrap(), "2025-02");
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("2025-2").is_err());
    }
}
