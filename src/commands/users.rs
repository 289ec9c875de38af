// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_active_user, parse_email, set_active_user};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let raw = sub.get_one::<String>("EMAIL").unwrap();
            let email = parse_email(raw.trim())?;
            set_active_user(conn, &email)?;
            println!("Active profile set to {}", email);
        }
        Some(("show", _)) => match get_active_user(conn)? {
            Some(email) => println!("{}", email),
            None => println!("No active profile. Run `fintrack user set <email>` first"),
        },
        _ => {}
    }
    Ok(())
}
