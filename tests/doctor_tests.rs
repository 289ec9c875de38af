// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::commands::doctor;
use rusqlite::{params, Connection};

const OWNER: &str = "ada@example.com";

// Foreign keys stay off here so the seeds below can reproduce the
// dangling references doctor exists to catch.
fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE settings(key TEXT PRIMARY KEY, value TEXT NOT NULL);
        CREATE TABLE categories(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_email TEXT NOT NULL,
            kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
            name TEXT NOT NULL,
            icon TEXT NOT NULL,
            color TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_email, name)
        );
        CREATE TABLE transactions(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_email TEXT NOT NULL,
            category_id INTEGER,
            kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
            amount TEXT NOT NULL,
            description TEXT,
            date TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE TABLE goals(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_email TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            limit_amount TEXT NOT NULL,
            alert_triggered INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_email, category_id)
        );
        "#,
    )
    .unwrap();
    conn.execute(
        "INSERT INTO settings(key, value) VALUES ('active_user', ?1)",
        params![OWNER],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO categories(user_email, kind, name, icon, color)
         VALUES (?1,'expense','Food','utensils','#EF4444')",
        params![OWNER],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO categories(user_email, kind, name, icon, color)
         VALUES (?1,'income','Salary','dollar-sign','#10B981')",
        params![OWNER],
    )
    .unwrap();
    conn
}

fn tags(conn: &Connection) -> Vec<String> {
    doctor::findings(conn, OWNER)
        .unwrap()
        .into_iter()
        .map(|row| row[0].clone())
        .collect()
}

#[test]
fn consistent_data_has_no_findings() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(user_email, category_id, kind, amount, date)
         VALUES (?1,1,'expense','12.00','2025-01-05')",
        params![OWNER],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO goals(user_email, category_id, limit_amount) VALUES (?1,1,'100.00')",
        params![OWNER],
    )
    .unwrap();
    assert!(doctor::findings(&conn, OWNER).unwrap().is_empty());
}

#[test]
fn flags_transactions_with_a_dead_category() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(user_email, category_id, kind, amount, date)
         VALUES (?1,999,'expense','12.00','2025-01-05')",
        params![OWNER],
    )
    .unwrap();
    assert_eq!(tags(&conn), ["tx_missing_category"]);
}

#[test]
fn flags_kind_mismatches_with_both_sides_named() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(user_email, category_id, kind, amount, date)
         VALUES (?1,1,'income','12.00','2025-01-05')",
        params![OWNER],
    )
    .unwrap();
    let findings = doctor::findings(&conn, OWNER).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0][0], "kind_mismatch");
    assert!(findings[0][1].contains("is income but 'Food' is expense"));
}

#[test]
fn flags_goals_without_a_category() {
    let conn = setup();
    conn.execute(
        "INSERT INTO goals(user_email, category_id, limit_amount) VALUES (?1,999,'50.00')",
        params![OWNER],
    )
    .unwrap();
    assert_eq!(tags(&conn), ["goal_missing_category"]);
}

#[test]
fn flags_goals_watching_income() {
    let conn = setup();
    conn.execute(
        "INSERT INTO goals(user_email, category_id, limit_amount) VALUES (?1,2,'50.00')",
        params![OWNER],
    )
    .unwrap();
    assert_eq!(tags(&conn), ["goal_on_income_category"]);
}

#[test]
fn flags_limits_progress_would_reject() {
    let conn = setup();
    conn.execute(
        "INSERT INTO goals(user_email, category_id, limit_amount) VALUES (?1,1,'0')",
        params![OWNER],
    )
    .unwrap();
    assert_eq!(tags(&conn), ["non_positive_goal_limit"]);
}

#[test]
fn flags_negative_stored_amounts() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(user_email, category_id, kind, amount, date)
         VALUES (?1,1,'expense','-5.00','2025-01-05')",
        params![OWNER],
    )
    .unwrap();
    assert_eq!(tags(&conn), ["negative_amount"]);
}

#[test]
fn findings_are_scoped_to_the_owner() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(user_email, category_id, kind, amount, date)
         VALUES ('bob@example.com',999,'expense','-1.00','2025-01-05')",
        [],
    )
    .unwrap();
    assert!(doctor::findings(&conn, OWNER).unwrap().is_empty());
}
