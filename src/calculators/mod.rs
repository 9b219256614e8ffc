//! stateless financial calculators
//!
//! every function here is pure and either returns a finite value or an
//! [`AdvisorError`] describing which precondition was violated.

pub mod debt;
pub mod interest;
pub mod retirement;
pub mod savings;

use crate::errors::{AdvisorError, Result};

pub use debt::{debt_payoff_time, loan_monthly_payment, loan_summary, DebtPayoff, LoanPayment};
pub use interest::{
    compound_interest, compound_interest_with, future_value_of_contributions, interest_earned,
    CompoundingFrequency,
};
pub use retirement::{
    retirement_needs, retirement_needs_with, retirement_savings_projection,
    RetirementAssumptions, RetirementSavings, DEFAULT_INFLATION_RATE, WITHDRAWAL_RULE_DIVISOR,
};
pub use savings::{emergency_fund, savings_rate, DEFAULT_EMERGENCY_FUND_MONTHS};

/// reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AdvisorError::InvalidInput { field, value })
    }
}

/// reject NaN, infinities, zero and negative values
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AdvisorError::InvalidInput { field, value })
    }
}
