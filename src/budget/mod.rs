pub mod analyzer;
pub mod expenses;
pub mod history;

pub use analyzer::{generate_budget_summary, BudgetSummary, CategoryBreakdown};
pub use expenses::ExpenseMap;
pub use history::{BudgetHistory, BudgetSnapshot, SavingsTrend};
