use serde::{Deserialize, Serialize};

use crate::calculators::ensure_non_negative;
use crate::calculators::interest::future_value_of_contributions;
use crate::errors::{AdvisorError, Result};

/// nest egg multiple of annual spending, the inverse of a 4% safe withdrawal rate
pub const WITHDRAWAL_RULE_DIVISOR: f64 = 25.0;

/// long-run inflation assumption (3%)
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;

/// assumptions behind a retirement projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementAssumptions {
    pub inflation_rate: f64,
    pub withdrawal_rule_divisor: f64,
}

impl Default for RetirementAssumptions {
    fn default() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            withdrawal_rule_divisor: WITHDRAWAL_RULE_DIVISOR,
        }
    }
}

/// outcome of saving a fixed amount every month until retirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementSavings {
    pub future_value: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
}

/// savings needed at retirement to fund `desired_annual_income` in today's money
pub fn retirement_needs(
    current_age: u32,
    retirement_age: u32,
    desired_annual_income: f64,
    inflation_rate: f64,
) -> Result<f64> {
    let assumptions = RetirementAssumptions {
        inflation_rate,
        ..RetirementAssumptions::default()
    };
    retirement_needs_with(&assumptions, current_age, retirement_age, desired_annual_income)
}

pub fn retirement_needs_with(
    assumptions: &RetirementAssumptions,
    current_age: u32,
    retirement_age: u32,
    desired_annual_income: f64,
) -> Result<f64> {
    if current_age >= retirement_age {
        return Err(AdvisorError::InvalidAgeRange {
            current_age,
            retirement_age,
        });
    }
    ensure_non_negative("desired_annual_income", desired_annual_income)?;
    ensure_non_negative("inflation_rate", assumptions.inflation_rate)?;
    if !(assumptions.withdrawal_rule_divisor.is_finite() && assumptions.withdrawal_rule_divisor > 0.0) {
        return Err(AdvisorError::InvalidInput {
            field: "withdrawal_rule_divisor",
            value: assumptions.withdrawal_rule_divisor,
        });
    }

    let years = f64::from(retirement_age - current_age);
    let future_income = desired_annual_income * (1.0 + assumptions.inflation_rate).powf(years);
    Ok(future_income * assumptions.withdrawal_rule_divisor)
}

/// project monthly contributions growing at `annual_return` percent
pub fn retirement_savings_projection(
    monthly_contribution: f64,
    years: u32,
    annual_return: f64,
) -> Result<RetirementSavings> {
    ensure_non_negative("annual_return", annual_return)?;
    if years == 0 {
        return Err(AdvisorError::InvalidTimeHorizon {
            message: "years to retirement must be positive".to_string(),
        });
    }

    let months = years * 12;
    let monthly_rate = annual_return / 12.0 / 100.0;
    let future_value = future_value_of_contributions(monthly_contribution, months, monthly_rate)?;
    let total_contributions = monthly_contribution * f64::from(months);

    Ok(RetirementSavings {
        future_value,
        total_contributions,
        interest_earned: future_value - total_contributions,
    })
}
