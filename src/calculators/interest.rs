use serde::{Deserialize, Serialize};

use crate::calculators::{ensure_non_negative, ensure_positive};
use crate::errors::{AdvisorError, Result};

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Annual => 1,
        }
    }
}

/// future value of `principal` after `years` at `annual_rate` (0.05 for 5%)
/// compounded `periods_per_year` times a year
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
    periods_per_year: u32,
) -> Result<f64> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate", annual_rate)?;
    ensure_non_negative("years", years)?;
    if periods_per_year == 0 {
        return Err(AdvisorError::InvalidTimeHorizon {
            message: "compounding periods per year must be positive".to_string(),
        });
    }
    if years == 0.0 {
        return Ok(principal);
    }

    let n = f64::from(periods_per_year);
    Ok(principal * (1.0 + annual_rate / n).powf(n * years))
}

/// compound interest with a typed frequency
pub fn compound_interest_with(
    principal: f64,
    annual_rate: f64,
    years: f64,
    frequency: CompoundingFrequency,
) -> Result<f64> {
    compound_interest(principal, annual_rate, years, frequency.periods_per_year())
}

/// interest portion only, final value minus principal
pub fn interest_earned(
    principal: f64,
    annual_rate: f64,
    years: f64,
    periods_per_year: u32,
) -> Result<f64> {
    Ok(compound_interest(principal, annual_rate, years, periods_per_year)? - principal)
}

/// future value of a fixed monthly contribution (ordinary annuity)
pub fn future_value_of_contributions(
    monthly_contribution: f64,
    months: u32,
    monthly_rate: f64,
) -> Result<f64> {
    ensure_non_negative("monthly_contribution", monthly_contribution)?;
    ensure_non_negative("monthly_rate", monthly_rate)?;

    let periods = f64::from(months);
    if monthly_rate == 0.0 {
        return Ok(monthly_contribution * periods);
    }

    let growth = (1.0 + ensure_positive("monthly_rate", monthly_rate)?).powf(periods);
    Ok(monthly_contribution * ((growth - 1.0) / monthly_rate))
}
