// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{FlowKind, Transaction};

/// Months kept by `monthly_buckets`. Older buckets are dropped, not merged.
pub const BUCKET_LIMIT: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBucket {
    pub month: String, // zero-padded YYYY-MM
    pub income: Decimal,
    pub expenses: Decimal,
}

pub fn total_by_kind(txs: &[Transaction], kind: FlowKind) -> Decimal {
    let mut total = Decimal::ZERO;
    for tx in txs.iter().filter(|t| t.kind == kind) {
        total += tx.amount;
    }
    total
}

/// Income and expense sums per calendar month, ascending by month key.
/// The zero-padded key makes lexical order calendar order, so buckets
/// never come back shuffled by display label.
pub fn monthly_buckets(txs: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut by_month: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for tx in txs {
        let slot = by_month
            .entry(tx.date.format("%Y-%m").to_string())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            FlowKind::Income => slot.0 += tx.amount,
            FlowKind::Expense => slot.1 += tx.amount,
        }
    }
    let skip = by_month.len().saturating_sub(BUCKET_LIMIT);
    by_month
        .into_iter()
        .skip(skip)
        .map(|(month, (income, expenses))| MonthlyBucket {
            month,
            income,
            expenses,
        })
        .collect()
}

/// Leading slice of an already-ordered snapshot. The persistence layer
/// hands transactions over newest first; this takes the first `n` as
/// given and never re-sorts, so an upstream ordering bug stays visible
/// instead of being papered over here.
pub fn recent(txs: &[Transaction], n: usize) -> &[Transaction] {
    &txs[..txs.len().min(n)]
}
