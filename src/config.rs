use serde::{Deserialize, Serialize};

use crate::calculators::retirement::{retirement_needs_with, RetirementAssumptions};
use crate::calculators::savings::{emergency_fund, DEFAULT_EMERGENCY_FUND_MONTHS};
use crate::errors::{AdvisorError, Result};
use crate::types::{RiskTolerance, UserType};

/// advisor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub thresholds: InsightThresholds,
    pub retirement: RetirementAssumptions,
    pub emergency_fund_months: u32,
    /// days without a budget analysis before a reminder is raised
    pub budget_reminder_days: i64,
    /// learning streak length that earns a notification
    pub learning_streak_milestone: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            thresholds: InsightThresholds::default(),
            retirement: RetirementAssumptions::default(),
            emergency_fund_months: DEFAULT_EMERGENCY_FUND_MONTHS,
            budget_reminder_days: 30,
            learning_streak_milestone: 5,
        }
    }
}

impl AdvisorConfig {
    /// load configuration from json, missing fields are an error
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AdvisorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// emergency fund target for the configured number of months
    pub fn emergency_fund(&self, monthly_expenses: f64) -> Result<f64> {
        emergency_fund(monthly_expenses, self.emergency_fund_months)
    }

    /// retirement nest egg under the configured inflation and withdrawal rule
    pub fn retirement_needs(
        &self,
        current_age: u32,
        retirement_age: u32,
        desired_annual_income: f64,
    ) -> Result<f64> {
        retirement_needs_with(&self.retirement, current_age, retirement_age, desired_annual_income)
    }

    /// check that every threshold is a usable number and the bands are ordered
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let named = [
            ("savings_critical_below", t.savings_critical_below),
            ("savings_improvement_below", t.savings_improvement_below),
            ("savings_excellent_at", t.savings_excellent_at),
            ("housing_watch_above", t.housing_watch_above),
            ("housing_alert_above", t.housing_alert_above),
            ("dominant_expense_above", t.dominant_expense_above),
            ("professional_savings_above", t.professional_savings_above),
            ("emergency_fund_target_months", t.emergency_fund_target_months),
            ("inflation_rate", self.retirement.inflation_rate),
        ];
        if let Some((name, value)) = named.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            return Err(invalid(format!("{} must be a non-negative number, got {}", name, value)));
        }

        if t.savings_critical_below > t.savings_improvement_below {
            return Err(invalid("critical savings threshold exceeds improvement threshold"));
        }
        if t.savings_improvement_below > t.savings_excellent_at {
            return Err(invalid("improvement savings threshold exceeds excellent threshold"));
        }
        if t.housing_watch_above > t.housing_alert_above {
            return Err(invalid("housing watch threshold exceeds alert threshold"));
        }
        if self.emergency_fund_months == 0 {
            return Err(invalid("emergency fund months must be positive"));
        }
        let divisor = self.retirement.withdrawal_rule_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(invalid(format!("withdrawal rule divisor must be positive, got {}", divisor)));
        }
        if self.budget_reminder_days < 0 {
            return Err(invalid("budget reminder days must not be negative"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AdvisorError {
    AdvisorError::InvalidConfiguration {
        message: message.into(),
    }
}

/// thresholds used by the insight rules, all values are percentages
/// except `emergency_fund_target_months`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    pub savings_critical_below: f64,
    pub savings_improvement_below: f64,
    pub savings_excellent_at: f64,
    pub housing_watch_above: f64,
    pub housing_alert_above: f64,
    pub dominant_expense_above: f64,
    pub professional_savings_above: f64,
    pub emergency_fund_target_months: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            savings_critical_below: 5.0,
            savings_improvement_below: 10.0,
            savings_excellent_at: 20.0,
            housing_watch_above: 30.0,
            housing_alert_above: 50.0,
            dominant_expense_above: 25.0,
            professional_savings_above: 15.0,
            emergency_fund_target_months: 3.0,
        }
    }
}

/// how the assistant should talk to a user type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserTypeProfile {
    pub prompt_style: &'static str,
    pub focus_areas: &'static [&'static str],
    pub complexity: &'static str,
}

impl UserType {
    pub fn profile(&self) -> UserTypeProfile {
        match self {
            UserType::Student => UserTypeProfile {
                prompt_style: "simple",
                focus_areas: &["budgeting", "student_loans", "part_time_income"],
                complexity: "basic",
            },
            UserType::Professional => UserTypeProfile {
                prompt_style: "sophisticated",
                focus_areas: &["investments", "tax_optimization", "retirement"],
                complexity: "advanced",
            },
            UserType::General => UserTypeProfile {
                prompt_style: "balanced",
                focus_areas: &["general_finance", "savings", "budgeting"],
                complexity: "intermediate",
            },
            UserType::Retiree => UserTypeProfile {
                prompt_style: "balanced",
                focus_areas: &["income_planning", "withdrawal_strategy", "healthcare"],
                complexity: "intermediate",
            },
            UserType::SmallBusinessOwner => UserTypeProfile {
                prompt_style: "sophisticated",
                focus_areas: &["cash_flow", "tax_optimization", "retirement"],
                complexity: "advanced",
            },
        }
    }
}

/// suggested portfolio split, fractions sum to one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
}

impl RiskTolerance {
    pub fn allocation(&self) -> AssetAllocation {
        match self {
            RiskTolerance::Conservative => AssetAllocation {
                stocks: 0.2,
                bonds: 0.7,
                cash: 0.1,
            },
            RiskTolerance::Moderate => AssetAllocation {
                stocks: 0.6,
                bonds: 0.3,
                cash: 0.1,
            },
            RiskTolerance::Aggressive => AssetAllocation {
                stocks: 0.8,
                bonds: 0.15,
                cash: 0.05,
            },
        }
    }
}
