use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AdvisorError;

/// budget expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Transportation,
        ExpenseCategory::Food,
        ExpenseCategory::Utilities,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AdvisorError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// kind of user the advisor is talking to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Student,
    Professional,
    #[default]
    General,
    Retiree,
    SmallBusinessOwner,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Professional => "professional",
            UserType::General => "general",
            UserType::Retiree => "retiree",
            UserType::SmallBusinessOwner => "small_business_owner",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserType::Student),
            "professional" => Ok(UserType::Professional),
            "general" => Ok(UserType::General),
            "retiree" => Ok(UserType::Retiree),
            "small_business_owner" => Ok(UserType::SmallBusinessOwner),
            _ => Err(AdvisorError::UnknownUserType {
                name: s.to_string(),
            }),
        }
    }
}

/// financial goals selectable during onboarding
///
/// declaration order is the iteration order of a goal set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    EmergencyFund,
    MajorPurchase,
    Investing,
    DebtPayoff,
    Education,
    Retirement,
    FinancialLiteracy,
}

impl Goal {
    pub const ALL: [Goal; 7] = [
        Goal::EmergencyFund,
        Goal::MajorPurchase,
        Goal::Investing,
        Goal::DebtPayoff,
        Goal::Education,
        Goal::Retirement,
        Goal::FinancialLiteracy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::EmergencyFund => "emergency_fund",
            Goal::MajorPurchase => "major_purchase",
            Goal::Investing => "investing",
            Goal::DebtPayoff => "debt_payoff",
            Goal::Education => "education",
            Goal::Retirement => "retirement",
            Goal::FinancialLiteracy => "financial_literacy",
        }
    }

    /// display label used by progress views
    pub fn label(&self) -> &'static str {
        match self {
            Goal::EmergencyFund => "Emergency Fund",
            Goal::MajorPurchase => "Major Purchase",
            Goal::Investing => "Start Investing",
            Goal::DebtPayoff => "Debt Payoff",
            Goal::Education => "Education Fund",
            Goal::Retirement => "Retirement",
            Goal::FinancialLiteracy => "Financial Education",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Goal::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AdvisorError::UnknownGoal {
                name: s.to_string(),
            })
    }
}

/// investment risk tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl FromStr for RiskTolerance {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskTolerance::Conservative),
            "moderate" => Ok(RiskTolerance::Moderate),
            "aggressive" => Ok(RiskTolerance::Aggressive),
            _ => Err(AdvisorError::UnknownRiskTolerance {
                name: s.to_string(),
            }),
        }
    }
}

/// 50/30/20 style split of monthly income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("housing".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Housing);
        assert_eq!(" Food ".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert!("Pets".parse::<ExpenseCategory>().unwrap_err().is_validation());
    }

    #[test]
    fn test_user_type_round_trip() {
        for name in ["student", "professional", "general", "retiree", "small_business_owner"] {
            let user_type: UserType = name.parse().unwrap();
            assert_eq!(user_type.to_string(), name);
        }
        assert!("wizard".parse::<UserType>().is_err());
        assert_eq!(UserType::default(), UserType::General);
    }

    #[test]
    fn test_goal_serde_names() {
        let json = serde_json::to_string(&Goal::DebtPayoff).unwrap();
        assert_eq!(json, "\"debt_payoff\"");
        assert_eq!("financial_literacy".parse::<Goal>().unwrap(), Goal::FinancialLiteracy);
    }
}
