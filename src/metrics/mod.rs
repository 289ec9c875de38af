// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over snapshot data. Every function here is a
//! side-effect-free computation on the collections it is handed; nothing
//! reads the database, caches, or mutates its inputs.

pub mod breakdown;
pub mod goals;
pub mod ledger;
pub mod portfolio;

use rust_decimal::Decimal;

/// Headline figure: income minus expenses plus current investment value.
pub fn net_worth(income: Decimal, expenses: Decimal, investments: Decimal) -> Decimal {
    income - expenses + investments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_worth_combines_the_three_totals() {
        let nw = net_worth(
            Decimal::from(1000),
            Decimal::from(120),
            Decimal::from(500),
        );
        assert_eq!(nw, Decimal::from(1380));
    }

    #[test]
    fn net_worth_can_go_negative() {
        let nw = net_worth(Decimal::from(100), Decimal::from(300), Decimal::ZERO);
        assert_eq!(nw, Decimal::from(-200));
    }
}
