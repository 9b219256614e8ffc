//! rule-based guidance derived from budget summaries and user profiles
//!
//! Every generator here is a pure function returning insights in the order
//! the rules fire. Whether an insight was already shown to the user is
//! tracked by the caller, not here.

pub mod goals;
pub mod health;
pub mod notifications;
pub mod proactive;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use goals::{generate_goal_based_insights, generate_goal_based_insights_with};
pub use health::{financial_health_score, goal_progress, HealthRating, HealthScore};
pub use notifications::{check_notifications, check_notifications_with};
pub use proactive::{analyze_budget_insights, analyze_budget_insights_with};

/// how prominently an insight should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Critical,
}

/// rule that produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    SavingsCritical,
    SavingsImprovement,
    SavingsExcellent,
    HousingAlert,
    HousingWatch,
    SpendingPattern,
    StudentSuccess,
    ProfessionalAdvantage,
    EmergencyFundPlan,
    EmergencyFundOnTrack,
    InvestmentReady,
    DebtStrategy,
    BudgetReminder,
    LearningStreak,
    LowSavingsWarning,
}

impl InsightKind {
    pub fn severity(&self) -> Severity {
        match self {
            InsightKind::SavingsCritical => Severity::Critical,
            InsightKind::SavingsImprovement
            | InsightKind::HousingAlert
            | InsightKind::LowSavingsWarning => Severity::Warning,
            InsightKind::SavingsExcellent
            | InsightKind::StudentSuccess
            | InsightKind::LearningStreak => Severity::Success,
            InsightKind::HousingWatch
            | InsightKind::SpendingPattern
            | InsightKind::ProfessionalAdvantage
            | InsightKind::EmergencyFundPlan
            | InsightKind::EmergencyFundOnTrack
            | InsightKind::InvestmentReady
            | InsightKind::DebtStrategy
            | InsightKind::BudgetReminder => Severity::Info,
        }
    }
}

/// a single piece of guidance with its presentation severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
