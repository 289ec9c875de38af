// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for values that reach the domain in an unusable shape. Amounts
/// and kind tokens fail fast here instead of being coerced to zero.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("invalid amount {0:?}: not an exact decimal")]
    InvalidAmount(String),
    #[error("unknown transaction kind {0:?} (expected income|expense)")]
    UnknownFlowKind(String),
    #[error("unknown investment kind {0:?} (expected crypto|stock|business)")]
    UnknownAssetKind(String),
    #[error("goal limit must be positive, got {0}")]
    NonPositiveLimit(Decimal),
    #[error("portfolio target must be positive, got {0}")]
    NonPositiveTarget(Decimal),
}

/// Strict monetary parse. Backing rows and user input share this path;
/// anything `rust_decimal` cannot represent exactly is an error.
pub fn parse_amount(raw: &str) -> Result<Decimal, DomainError> {
    Decimal::from_str_exact(raw.trim()).map_err(|_| DomainError::InvalidAmount(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Income => "income",
            FlowKind::Expense => "expense",
        }
    }

    pub fn parse(token: &str) -> Result<Self, DomainError> {
        match token {
            "income" => Ok(FlowKind::Income),
            "expense" => Ok(FlowKind::Expense),
            other => Err(DomainError::UnknownFlowKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Crypto,
    Stock,
    Business,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Crypto => "crypto",
            AssetKind::Stock => "stock",
            AssetKind::Business => "business",
        }
    }

    pub fn parse(token: &str) -> Result<Self, DomainError> {
        match token {
            "crypto" => Ok(AssetKind::Crypto),
            "stock" => Ok(AssetKind::Stock),
            "business" => Ok(AssetKind::Business),
            other => Err(DomainError::UnknownAssetKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub kind: FlowKind,
    pub name: String,
    pub icon: String,
    pub color: String, // #RRGGBB
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: FlowKind,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub kind: AssetKind,
    pub name: String,
    pub symbol: Option<String>,
    pub current_value: Decimal, // manual valuation, no feeds
    pub notes: Option<String>,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub category_id: i64,
    pub limit_amount: Decimal,
    pub alert_triggered: bool,
}
