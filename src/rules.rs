use serde::{Deserialize, Serialize};

use crate::calculators::ensure_non_negative;
use crate::errors::{AdvisorError, Result};
use crate::types::Allocation;

/// housing at or below this share of income is comfortable
pub const HOUSING_GOOD_MAX_PCT: f64 = 28.0;
/// housing above the good band up to this share is a stretch
pub const HOUSING_MODERATE_MAX_PCT: f64 = 35.0;

pub const NEEDS_SHARE: f64 = 0.5;
pub const WANTS_SHARE: f64 = 0.3;
pub const SAVINGS_SHARE: f64 = 0.2;

/// housing cost rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HousingCostRating {
    Good,
    Moderate,
    High,
}

impl HousingCostRating {
    pub fn description(&self) -> &'static str {
        match self {
            HousingCostRating::Good => "Good - Housing cost is within recommended range",
            HousingCostRating::Moderate => "Moderate - Housing cost is slightly high",
            HousingCostRating::High => "High - Housing cost exceeds recommended range",
        }
    }
}

/// split income into needs, wants and savings
pub fn fifty_thirty_twenty(income: f64) -> Result<Allocation> {
    ensure_non_negative("income", income)?;
    Ok(Allocation {
        needs: income * NEEDS_SHARE,
        wants: income * WANTS_SHARE,
        savings: income * SAVINGS_SHARE,
    })
}

/// rate housing cost as a share of income
pub fn evaluate_housing_cost(housing_cost: f64, income: f64) -> Result<HousingCostRating> {
    if !(income.is_finite() && income > 0.0) {
        return Err(AdvisorError::InvalidIncome { income });
    }
    ensure_non_negative("housing_cost", housing_cost)?;

    let percentage = 100.0 * housing_cost / income;
    if percentage <= HOUSING_GOOD_MAX_PCT {
        Ok(HousingCostRating::Good)
    } else if percentage <= HOUSING_MODERATE_MAX_PCT {
        Ok(HousingCostRating::Moderate)
    } else {
        Ok(HousingCostRating::High)
    }
}
