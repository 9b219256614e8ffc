pub mod budget;
pub mod calculators;
pub mod config;
pub mod errors;
pub mod export;
pub mod insights;
pub mod profile;
pub mod progress;
pub mod rules;
pub mod types;

// re-export key types
pub use budget::{
    generate_budget_summary, BudgetHistory, BudgetSnapshot, BudgetSummary, CategoryBreakdown,
    ExpenseMap, SavingsTrend,
};
pub use calculators::{
    compound_interest, debt_payoff_time, emergency_fund, future_value_of_contributions,
    loan_monthly_payment, retirement_needs, savings_rate, CompoundingFrequency, DebtPayoff,
    LoanPayment, RetirementAssumptions, RetirementSavings,
};
pub use config::{AdvisorConfig, AssetAllocation, InsightThresholds, UserTypeProfile};
pub use errors::{AdvisorError, ErrorKind, Result};
pub use export::{ChatExchange, ExportDocument};
pub use insights::{
    analyze_budget_insights, check_notifications, financial_health_score,
    generate_goal_based_insights, goal_progress, HealthRating, HealthScore, Insight, InsightKind,
    Severity,
};
pub use profile::{RawProfile, UserProfile};
pub use progress::LearningProgress;
pub use rules::{evaluate_housing_cost, fifty_thirty_twenty, HousingCostRating};
pub use types::{Allocation, ExpenseCategory, Goal, RiskTolerance, UserType};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
