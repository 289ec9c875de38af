// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, DomainError, FlowKind, Goal, Transaction};

/// Label shown for a goal whose category no longer exists. Goals may
/// outlive their category, so this is a display fallback, not an error.
pub const MISSING_CATEGORY_LABEL: &str = "(unknown category)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStanding {
    UnderBudget,
    OverBudget,
}

impl BudgetStanding {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStanding::UnderBudget => "under-budget",
            BudgetStanding::OverBudget => "over-budget",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetGoalStatus {
    pub goal_id: i64,
    pub category_id: i64,
    pub category_name: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub percentage: Decimal, // uncapped; 120 means 20% past the limit
    pub standing: BudgetStanding,
}

impl BudgetGoalStatus {
    /// Amount past the limit; zero while under budget.
    pub fn overage(&self) -> Decimal {
        match self.standing {
            BudgetStanding::OverBudget => self.spent - self.limit,
            BudgetStanding::UnderBudget => Decimal::ZERO,
        }
    }

    /// Room left under the limit; zero once exceeded.
    pub fn left(&self) -> Decimal {
        (self.limit - self.spent).max(Decimal::ZERO)
    }
}

/// Spend-to-limit status per goal, recomputed from the snapshot on every
/// call. `spent` is the sum of all expense transactions booked against
/// the goal's category; the standing flips to over-budget strictly past
/// the limit and flips right back once data brings it under again.
pub fn budget_statuses(
    goals: &[Goal],
    txs: &[Transaction],
    categories: &[Category],
) -> Result<Vec<BudgetGoalStatus>, DomainError> {
    let mut out = Vec::with_capacity(goals.len());
    for goal in goals {
        if goal.limit_amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveLimit(goal.limit_amount));
        }
        let mut spent = Decimal::ZERO;
        for tx in txs
            .iter()
            .filter(|t| t.kind == FlowKind::Expense && t.category_id == Some(goal.category_id))
        {
            spent += tx.amount;
        }
        let category_name = categories
            .iter()
            .find(|c| c.id == goal.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| MISSING_CATEGORY_LABEL.to_string());
        let standing = if spent > goal.limit_amount {
            BudgetStanding::OverBudget
        } else {
            BudgetStanding::UnderBudget
        };
        out.push(BudgetGoalStatus {
            goal_id: goal.id,
            category_id: goal.category_id,
            category_name,
            limit: goal.limit_amount,
            spent,
            percentage: spent * Decimal::ONE_HUNDRED / goal.limit_amount,
            standing,
        });
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetStanding {
    InProgress,
    Completed,
}

impl TargetStanding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStanding::InProgress => "in-progress",
            TargetStanding::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetStatus {
    pub target: Decimal,
    pub total: Decimal,
    pub percentage: Decimal, // clamped to [0, 100]
    pub remaining: Decimal,
    pub standing: TargetStanding,
}

/// Portfolio-target progress: how far the current investment total has
/// come toward `target`. Unlike budget percentages this one is clamped,
/// so an overshoot reads as a finished goal, not a 340% bar.
pub fn target_status(total_investments: Decimal, target: Decimal) -> Result<TargetStatus, DomainError> {
    if target <= Decimal::ZERO {
        return Err(DomainError::NonPositiveTarget(target));
    }
    let percentage = (total_investments * Decimal::ONE_HUNDRED / target)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let standing = if percentage >= Decimal::ONE_HUNDRED {
        TargetStanding::Completed
    } else {
        TargetStanding::InProgress
    };
    Ok(TargetStatus {
        target,
        total: total_investments,
        percentage,
        remaining: (target - total_investments).max(Decimal::ZERO),
        standing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(id: i64, category_id: i64, limit: &str) -> Goal {
        Goal {
            id,
            category_id,
            limit_amount: Decimal::from_str_exact(limit).unwrap(),
            alert_triggered: false,
        }
    }

    fn cat(id: i64, name: &str) -> Category {
        Category {
            id,
            kind: FlowKind::Expense,
            name: name.to_string(),
            icon: "utensils".to_string(),
            color: "#EF4444".to_string(),
        }
    }

    fn expense(amount: &str, category_id: i64) -> Transaction {
        Transaction {
            id: 0,
            kind: FlowKind::Expense,
            amount: Decimal::from_str_exact(amount).unwrap(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category_id: Some(category_id),
        }
    }

    #[test]
    fn overspending_flips_to_over_budget_with_the_overage() {
        let goals = vec![goal(1, 1, "100.00")];
        let cats = vec![cat(1, "Food")];
        let txs = vec![expense("70.00", 1), expense("50.00", 1)];
        let statuses = budget_statuses(&goals, &txs, &cats).unwrap();
        assert_eq!(statuses.len(), 1);
        let s = &statuses[0];
        assert_eq!(s.category_name, "Food");
        assert_eq!(format!("{:.2}", s.spent), "120.00");
        assert_eq!(s.percentage, Decimal::from(120));
        assert_eq!(s.standing, BudgetStanding::OverBudget);
        assert_eq!(format!("{:.2}", s.overage()), "20.00");
        assert_eq!(s.left(), Decimal::ZERO);
    }

    #[test]
    fn hitting_the_limit_exactly_is_still_under_budget() {
        let goals = vec![goal(1, 1, "100.00")];
        let cats = vec![cat(1, "Food")];
        let txs = vec![expense("100.00", 1)];
        let s = &budget_statuses(&goals, &txs, &cats).unwrap()[0];
        assert_eq!(s.standing, BudgetStanding::UnderBudget);
        assert_eq!(s.percentage, Decimal::ONE_HUNDRED);
        assert_eq!(s.overage(), Decimal::ZERO);
        assert_eq!(s.left(), Decimal::ZERO);
    }

    #[test]
    fn classification_is_monotonic_in_spend() {
        let goals = vec![goal(1, 1, "100.00")];
        let cats = vec![cat(1, "Food")];
        let mut txs = Vec::new();
        let mut seen_over = false;
        for _ in 0..8 {
            txs.push(expense("30.00", 1));
            let s = &budget_statuses(&goals, &txs, &cats).unwrap()[0];
            if seen_over {
                assert_eq!(s.standing, BudgetStanding::OverBudget);
            }
            seen_over = seen_over || s.standing == BudgetStanding::OverBudget;
        }
        assert!(seen_over);
    }

    #[test]
    fn only_matching_expense_spend_counts() {
        let goals = vec![goal(1, 1, "100.00")];
        let cats = vec![cat(1, "Food")];
        let mut txs = vec![expense("40.00", 1), expense("99.00", 2)];
        // An income row on the same category must not count as spend.
        txs.push(Transaction {
            id: 0,
            kind: FlowKind::Income,
            amount: Decimal::from_str_exact("500.00").unwrap(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            category_id: Some(1),
        });
        let s = &budget_statuses(&goals, &txs, &cats).unwrap()[0];
        assert_eq!(format!("{:.2}", s.spent), "40.00");
        assert_eq!(s.standing, BudgetStanding::UnderBudget);
    }

    #[test]
    fn missing_category_falls_back_to_a_label() {
        let goals = vec![goal(1, 42, "50.00")];
        let txs = vec![expense("10.00", 42)];
        let s = &budget_statuses(&goals, &txs, &[]).unwrap()[0];
        assert_eq!(s.category_name, MISSING_CATEGORY_LABEL);
        assert_eq!(format!("{:.2}", s.spent), "10.00");
    }

    #[test]
    fn non_positive_limits_are_rejected() {
        let cats = vec![cat(1, "Food")];
        let zero = vec![goal(1, 1, "0.00")];
        assert!(matches!(
            budget_statuses(&zero, &[], &cats),
            Err(DomainError::NonPositiveLimit(_))
        ));
        let negative = vec![goal(1, 1, "-25.00")];
        assert!(matches!(
            budget_statuses(&negative, &[], &cats),
            Err(DomainError::NonPositiveLimit(_))
        ));
    }

    #[test]
    fn target_percentage_is_clamped_to_one_hundred() {
        let s = target_status(
            Decimal::from_str_exact("50000.00").unwrap(),
            Decimal::from_str_exact("10.00").unwrap(),
        )
        .unwrap();
        assert_eq!(s.percentage, Decimal::ONE_HUNDRED);
        assert_eq!(s.standing, TargetStanding::Completed);
        assert_eq!(s.remaining, Decimal::ZERO);
    }

    #[test]
    fn target_progress_reports_remaining_amount() {
        let s = target_status(
            Decimal::from_str_exact("2500.00").unwrap(),
            Decimal::from_str_exact("10000.00").unwrap(),
        )
        .unwrap();
        assert_eq!(s.percentage, Decimal::from(25));
        assert_eq!(s.standing, TargetStanding::InProgress);
        assert_eq!(format!("{:.2}", s.remaining), "7500.00");
    }

    #[test]
    fn completion_lands_exactly_at_the_target() {
        let s = target_status(Decimal::from(800), Decimal::from(800)).unwrap();
        assert_eq!(s.percentage, Decimal::ONE_HUNDRED);
        assert_eq!(s.standing, TargetStanding::Completed);
    }

    #[test]
    fn non_positive_targets_are_rejected() {
        assert!(matches!(
            target_status(Decimal::from(100), Decimal::ZERO),
            Err(DomainError::NonPositiveTarget(_))
        ));
        assert!(matches!(
            target_status(Decimal::from(100), Decimal::from(-5)),
            Err(DomainError::NonPositiveTarget(_))
        ));
    }
}
