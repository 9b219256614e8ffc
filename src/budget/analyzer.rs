use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::budget::expenses::ExpenseMap;
use crate::calculators::savings_rate;
use crate::errors::{AdvisorError, Result};
use crate::types::ExpenseCategory;

/// savings rate below which the summary flags low savings
pub const LOW_SAVINGS_RATE: f64 = 10.0;
/// savings rate from which the summary praises the budget
pub const EXCELLENT_SAVINGS_RATE: f64 = 20.0;

pub const LOW_SAVINGS_REMARK: &str = "Low savings rate. Consider reducing discretionary expenses.";
pub const EXCELLENT_SAVINGS_REMARK: &str =
    "Excellent savings rate! You're on track for financial goals.";

/// one row of the expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: ExpenseCategory,
    pub amount: f64,
    /// share of total expenses, 0 when there are no expenses
    pub percentage: f64,
}

/// result of analyzing one month of income and expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub savings: f64,
    pub savings_rate: f64,
    /// sorted by amount, largest first
    pub expense_breakdown: Vec<CategoryBreakdown>,
    pub insights: Vec<String>,
}

impl BudgetSummary {
    pub fn category_amount(&self, category: ExpenseCategory) -> Option<f64> {
        self.expense_breakdown
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.amount)
    }

    pub fn largest_expense(&self) -> Option<&CategoryBreakdown> {
        self.expense_breakdown.first()
    }

    /// category spend as a share of income, `None` without income or category
    pub fn category_percentage_of_income(&self, category: ExpenseCategory) -> Option<f64> {
        if self.total_income <= 0.0 {
            return None;
        }
        self.category_amount(category)
            .map(|amount| 100.0 * amount / self.total_income)
    }
}

/// analyze a month of income against categorized expenses
pub fn generate_budget_summary(income: f64, expenses: &ExpenseMap) -> Result<BudgetSummary> {
    if !income.is_finite() || income < 0.0 {
        return Err(AdvisorError::InvalidIncome { income });
    }

    let total_expenses = expenses.total();
    let savings = income - total_expenses;
    let rate = savings_rate(income, total_expenses);

    let mut expense_breakdown: Vec<CategoryBreakdown> = expenses
        .iter()
        .map(|(category, amount)| CategoryBreakdown {
            category,
            amount,
            percentage: if total_expenses > 0.0 {
                100.0 * amount / total_expenses
            } else {
                0.0
            },
        })
        .collect();
    // stable sort keeps category order for equal amounts
    expense_breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let mut insights = Vec::new();
    if rate < LOW_SAVINGS_RATE {
        insights.push(LOW_SAVINGS_REMARK.to_string());
    } else if rate >= EXCELLENT_SAVINGS_RATE {
        insights.push(EXCELLENT_SAVINGS_REMARK.to_string());
    }

    debug!(
        income,
        total_expenses,
        savings_rate = rate,
        categories = expense_breakdown.len(),
        "generated budget summary"
    );

    Ok(BudgetSummary {
        total_income: income,
        total_expenses,
        savings,
        savings_rate: rate,
        expense_breakdown,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> ExpenseMap {
        ExpenseMap::from_entries([
            ("Housing", 1500.0),
            ("Food", 500.0),
            ("Transportation", 300.0),
            ("Other", 200.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_budget_summary() {
        let summary = generate_budget_summary(5000.0, &sample_expenses()).unwrap();

        assert_eq!(summary.total_income, 5000.0);
        assert_eq!(summary.total_expenses, 2500.0);
        assert_eq!(summary.savings, 2500.0);
        assert_eq!(summary.savings_rate, 50.0);
        assert_eq!(summary.insights, vec![EXCELLENT_SAVINGS_REMARK.to_string()]);

        let total_pct: f64 = summary.expense_breakdown.iter().map(|r| r.percentage).sum();
        assert!((total_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let summary = generate_budget_summary(5000.0, &sample_expenses()).unwrap();
        let categories: Vec<ExpenseCategory> =
            summary.expense_breakdown.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                ExpenseCategory::Housing,
                ExpenseCategory::Food,
                ExpenseCategory::Transportation,
                ExpenseCategory::Other,
            ]
        );
        assert_eq!(summary.largest_expense().unwrap().percentage, 60.0);
    }

    #[test]
    fn test_equal_amounts_keep_category_order() {
        let expenses = ExpenseMap::from_entries([("Shopping", 100.0), ("Food", 100.0)]).unwrap();
        let summary = generate_budget_summary(1000.0, &expenses).unwrap();
        assert_eq!(summary.expense_breakdown[0].category, ExpenseCategory::Food);
        assert_eq!(summary.expense_breakdown[1].category, ExpenseCategory::Shopping);
    }

    #[test]
    fn test_zero_income() {
        let expenses = ExpenseMap::from_entries([("Housing", 1000.0)]).unwrap();
        let summary = generate_budget_summary(0.0, &expenses).unwrap();
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.savings, -1000.0);
        assert_eq!(summary.insights, vec![LOW_SAVINGS_REMARK.to_string()]);
        assert_eq!(summary.category_percentage_of_income(ExpenseCategory::Housing), None);
    }

    #[test]
    fn test_no_expenses() {
        let summary = generate_budget_summary(3000.0, &ExpenseMap::new()).unwrap();
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.savings_rate, 100.0);
        assert!(summary.expense_breakdown.is_empty());

        let zeros = ExpenseMap::from_entries([("Food", 0.0), ("Other", 0.0)]).unwrap();
        let summary = generate_budget_summary(3000.0, &zeros).unwrap();
        assert!(summary.expense_breakdown.iter().all(|r| r.percentage == 0.0));
    }

    #[test]
    fn test_middle_band_has_no_basic_insight() {
        let expenses = ExpenseMap::from_entries([("Housing", 4250.0)]).unwrap();
        let summary = generate_budget_summary(5000.0, &expenses).unwrap();
        assert_eq!(summary.savings_rate, 15.0);
        assert!(summary.insights.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let expenses = sample_expenses();
        let first = generate_budget_summary(4200.0, &expenses).unwrap();
        let second = generate_budget_summary(4200.0, &expenses).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_negative_income() {
        let err = generate_budget_summary(-1.0, &sample_expenses()).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidIncome { .. }));
    }

    #[test]
    fn test_percentage_of_income() {
        let summary = generate_budget_summary(5000.0, &sample_expenses()).unwrap();
        assert_eq!(summary.category_percentage_of_income(ExpenseCategory::Housing), Some(30.0));
        assert_eq!(summary.category_percentage_of_income(ExpenseCategory::Healthcare), None);
    }
}
