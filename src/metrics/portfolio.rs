// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Investment;

/// Default step count for the illustrative curve.
pub const SERIES_STEPS: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct HoldingPoint {
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct IllustrativePoint {
    pub step: usize,
    pub multiplier: Decimal,
    pub holdings: Vec<HoldingPoint>,
    pub total: Decimal,
}

pub fn total_value(investments: &[Investment]) -> Decimal {
    let mut total = Decimal::ZERO;
    for inv in investments {
        total += inv.current_value;
    }
    total
}

/// Fabricated growth curve for demo charts: each step scales every
/// holding's CURRENT value by a rising multiplier (0.70, 0.75, ...).
/// This is not historical data and render paths must label it as
/// illustrative. Empty portfolios produce an empty series.
pub fn illustrative_series(investments: &[Investment], steps: usize) -> Vec<IllustrativePoint> {
    if investments.is_empty() {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(steps);
    for step in 0..steps {
        let multiplier = step_multiplier(step);
        let mut holdings = Vec::with_capacity(investments.len());
        let mut total = Decimal::ZERO;
        for inv in investments {
            let value = inv.current_value * multiplier;
            total += value;
            holdings.push(HoldingPoint {
                name: inv.name.clone(),
                value,
            });
        }
        points.push(IllustrativePoint {
            step,
            multiplier,
            holdings,
            total,
        });
    }
    points
}

fn step_multiplier(step: usize) -> Decimal {
    // 0.70 + 0.05 per step, as an exact decimal.
    Decimal::new(70 + 5 * step as i64, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetKind;

    fn inv(name: &str, value: &str) -> Investment {
        Investment {
            id: 0,
            kind: AssetKind::Stock,
            name: name.to_string(),
            symbol: None,
            current_value: Decimal::from_str_exact(value).unwrap(),
            notes: None,
            updated_at: "2025-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn total_value_is_zero_for_an_empty_portfolio() {
        assert_eq!(total_value(&[]), Decimal::ZERO);
    }

    #[test]
    fn total_value_sums_exactly() {
        let list = vec![inv("BTC", "1234.56"), inv("ACME", "765.44")];
        assert_eq!(format!("{:.2}", total_value(&list)), "2000.00");
    }

    #[test]
    fn series_scales_every_holding_by_a_rising_multiplier() {
        let list = vec![inv("BTC", "1000.00"), inv("ACME", "500.00")];
        let series = illustrative_series(&list, SERIES_STEPS);
        assert_eq!(series.len(), SERIES_STEPS);

        assert_eq!(series[0].multiplier, Decimal::from_str_exact("0.70").unwrap());
        assert_eq!(series[5].multiplier, Decimal::from_str_exact("0.95").unwrap());
        for pair in series.windows(2) {
            assert!(pair[0].multiplier < pair[1].multiplier);
            assert!(pair[0].total < pair[1].total);
        }

        let first = &series[0];
        assert_eq!(first.holdings.len(), 2);
        assert_eq!(first.holdings[0].name, "BTC");
        assert_eq!(format!("{:.2}", first.holdings[0].value), "700.00");
        assert_eq!(format!("{:.2}", first.holdings[1].value), "350.00");
        assert_eq!(format!("{:.2}", first.total), "1050.00");

        // Each point's total is the scaled portfolio total.
        let total = total_value(&list);
        for point in &series {
            assert_eq!(point.total, total * point.multiplier);
        }
    }

    #[test]
    fn series_is_empty_without_holdings() {
        assert!(illustrative_series(&[], SERIES_STEPS).is_empty());
    }
}
