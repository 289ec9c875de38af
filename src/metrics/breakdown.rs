// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, FlowKind, Transaction};

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownEntry {
    pub category_id: i64,
    pub name: String,
    pub color: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub entries: Vec<BreakdownEntry>,
    pub grand_total: Decimal,
}

/// Per-category totals for one flow kind, in category order. Categories
/// with nothing booked are left out, so a zero `grand_total` means "no
/// data" and callers render that state instead of dividing; percentage
/// shares are the caller's computation (`total / grand_total * 100`).
pub fn by_category(
    txs: &[Transaction],
    categories: &[Category],
    kind: FlowKind,
) -> CategoryBreakdown {
    let mut entries = Vec::new();
    let mut grand_total = Decimal::ZERO;
    for cat in categories.iter().filter(|c| c.kind == kind) {
        let mut total = Decimal::ZERO;
        for tx in txs
            .iter()
            .filter(|t| t.kind == kind && t.category_id == Some(cat.id))
        {
            total += tx.amount;
        }
        if total.is_zero() {
            continue;
        }
        grand_total += total;
        entries.push(BreakdownEntry {
            category_id: cat.id,
            name: cat.name.clone(),
            color: cat.color.clone(),
            total,
        });
    }
    CategoryBreakdown {
        entries,
        grand_total,
    }
}
