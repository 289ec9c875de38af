// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::FlowKind;
use crate::store;
use crate::utils::{maybe_print_json, parse_color, parse_icon, pretty_table, require_active_user};
use anyhow::Result;
use rusqlite::{params, Connection};

const DEFAULT_ICON: &str = "question-circle";
const DEFAULT_COLOR: &str = "#EF4444";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let owner = require_active_user(conn)?;
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind = FlowKind::parse(sub.get_one::<String>("kind").unwrap())?;
            let name = sub
                .get_one::<String>("name")
                .map(|s| s.trim().to_string())
                .unwrap();
            let icon = match sub.get_one::<String>("icon") {
                Some(raw) => parse_icon(raw.trim())?,
                None => DEFAULT_ICON.to_string(),
            };
            let color = match sub.get_one::<String>("color") {
                Some(raw) => parse_color(raw.trim())?,
                None => DEFAULT_COLOR.to_string(),
            };
            conn.execute(
                "INSERT INTO categories(user_email, kind, name, icon, color) VALUES (?1,?2,?3,?4,?5)",
                params![owner, kind.as_str(), name, icon, color],
            )?;
            println!("Added {} category '{}'", kind, name);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let cats = store::categories(conn, &owner)?;
            if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
                let rows = cats
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.kind.to_string(),
                            c.name.clone(),
                            c.icon.clone(),
                            c.color.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Kind", "Name", "Icon", "Color"], rows)
                );
            }
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let n = conn.execute(
                "DELETE FROM categories WHERE user_email=?1 AND name=?2",
                params![owner, name],
            )?;
            if n == 0 {
                anyhow::bail!("Category '{}' not found", name);
            }
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
