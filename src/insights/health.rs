use serde::{Deserialize, Serialize};

use crate::budget::BudgetSummary;
use crate::progress::LearningProgress;
use crate::types::Goal;

const SAVINGS_POINTS_MAX: f64 = 40.0;
const EMERGENCY_FUND_POINTS: f64 = 20.0;
// no debt data is collected yet, every user gets the full component
const DEBT_MANAGEMENT_POINTS: f64 = 20.0;
const EDUCATION_POINTS_MAX: f64 = 20.0;

/// overall rating band of a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRating {
    Excellent,
    Good,
    NeedsWork,
}

impl HealthRating {
    pub fn from_score(total: f64) -> Self {
        if total >= 80.0 {
            HealthRating::Excellent
        } else if total >= 60.0 {
            HealthRating::Good
        } else {
            HealthRating::NeedsWork
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthRating::Excellent => "Excellent! You're on track for financial success!",
            HealthRating::Good => "Good progress! Focus on improving your weakest areas.",
            HealthRating::NeedsWork => "Let's work on building stronger financial habits!",
        }
    }
}

/// 0-100 score made of four components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub savings: f64,
    pub emergency_fund: f64,
    pub debt_management: f64,
    pub education: f64,
    pub total: f64,
    pub rating: HealthRating,
}

pub fn financial_health_score(summary: &BudgetSummary, progress: &LearningProgress) -> HealthScore {
    let rate = summary.savings_rate;
    let savings = (rate * 2.0).clamp(0.0, SAVINGS_POINTS_MAX);
    let emergency_fund = if rate > 0.0 { EMERGENCY_FUND_POINTS } else { 0.0 };
    let education = (progress.completed_count() as f64 * 2.0).min(EDUCATION_POINTS_MAX);
    let total = savings + emergency_fund + DEBT_MANAGEMENT_POINTS + education;

    HealthScore {
        savings,
        emergency_fund,
        debt_management: DEBT_MANAGEMENT_POINTS,
        education,
        total,
        rating: HealthRating::from_score(total),
    }
}

/// rough progress toward a goal, in percent
///
/// financial literacy follows completed lessons, every other goal uses the
/// savings rate as a proxy
pub fn goal_progress(
    goal: Goal,
    summary: Option<&BudgetSummary>,
    progress: &LearningProgress,
) -> f64 {
    match goal {
        Goal::FinancialLiteracy => progress.completion_percentage(),
        _ => summary.map_or(0.0, |s| (s.savings_rate * 5.0).clamp(0.0, 100.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{generate_budget_summary, ExpenseMap};
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};

    fn summary(income: f64, spend: f64) -> BudgetSummary {
        let expenses = ExpenseMap::from_entries([("Other", spend)]).unwrap();
        generate_budget_summary(income, &expenses).unwrap()
    }

    fn progress_with(topics: usize) -> LearningProgress {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let mut progress = LearningProgress::new();
        for i in 0..topics {
            progress.complete_topic(&format!("topic {}", i), "Beginner", &time);
        }
        progress
    }

    #[test]
    fn test_score_caps() {
        let score = financial_health_score(&summary(5000.0, 1000.0), &progress_with(15));
        assert_eq!(score.savings, 40.0);
        assert_eq!(score.education, 20.0);
        assert_eq!(score.total, 100.0);
        assert_eq!(score.rating, HealthRating::Excellent);
    }

    #[test]
    fn test_score_with_negative_savings() {
        let score = financial_health_score(&summary(3000.0, 3500.0), &LearningProgress::new());
        assert_eq!(score.savings, 0.0);
        assert_eq!(score.emergency_fund, 0.0);
        assert_eq!(score.total, 20.0);
        assert_eq!(score.rating, HealthRating::NeedsWork);
    }

    #[test]
    fn test_score_middle_band() {
        // 10% savings rate, three lessons
        let score = financial_health_score(&summary(5000.0, 4500.0), &progress_with(3));
        assert_eq!(score.total, 20.0 + 20.0 + 20.0 + 6.0);
        assert_eq!(score.rating, HealthRating::Good);
    }

    #[test]
    fn test_goal_progress() {
        let s = summary(5000.0, 4500.0);
        assert_eq!(goal_progress(Goal::Retirement, Some(&s), &LearningProgress::new()), 50.0);
        assert_eq!(goal_progress(Goal::Investing, None, &LearningProgress::new()), 0.0);
        assert_eq!(goal_progress(Goal::FinancialLiteracy, Some(&s), &progress_with(14)), 50.0);

        let rich = summary(5000.0, 0.0);
        assert_eq!(goal_progress(Goal::MajorPurchase, Some(&rich), &LearningProgress::new()), 100.0);
    }
}
