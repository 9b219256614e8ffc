use crate::calculators::ensure_non_negative;
use crate::errors::{AdvisorError, Result};

/// recommended number of months of expenses to hold in cash
pub const DEFAULT_EMERGENCY_FUND_MONTHS: u32 = 6;

/// emergency fund sized as a multiple of monthly expenses
pub fn emergency_fund(monthly_expenses: f64, months: u32) -> Result<f64> {
    ensure_non_negative("monthly_expenses", monthly_expenses)?;
    if months == 0 {
        return Err(AdvisorError::InvalidTimeHorizon {
            message: "emergency fund months must be positive".to_string(),
        });
    }
    Ok(monthly_expenses * f64::from(months))
}

/// percentage of income not spent
///
/// Zero income returns 0 whatever the expenses are. This is a deliberate
/// floor that keeps the rate finite, not an exact rate. The result is
/// negative when expenses exceed income.
///
/// A NaN or infinite argument also yields 0. Callers holding unchecked
/// numbers validate them first; [`ExpenseMap`](crate::budget::ExpenseMap)
/// and [`generate_budget_summary`](crate::budget::generate_budget_summary)
/// never pass one.
pub fn savings_rate(income: f64, expenses: f64) -> f64 {
    if income <= 0.0 || !income.is_finite() || !expenses.is_finite() {
        return 0.0;
    }
    100.0 * (income - expenses) / income
}
