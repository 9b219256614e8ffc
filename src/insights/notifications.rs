use hourglass_rs::SafeTimeProvider;
use tracing::debug;

use crate::budget::{BudgetHistory, BudgetSummary};
use crate::config::AdvisorConfig;
use crate::insights::{Insight, InsightKind};
use crate::progress::LearningProgress;

pub fn check_notifications(
    history: &BudgetHistory,
    progress: &LearningProgress,
    summary: Option<&BudgetSummary>,
    time: &SafeTimeProvider,
) -> Vec<Insight> {
    check_notifications_with(&AdvisorConfig::default(), history, progress, summary, time)
}

/// reminders for a stale budget, learning streak milestones and very low savings
pub fn check_notifications_with(
    config: &AdvisorConfig,
    history: &BudgetHistory,
    progress: &LearningProgress,
    summary: Option<&BudgetSummary>,
    time: &SafeTimeProvider,
) -> Vec<Insight> {
    let mut notifications = Vec::new();

    if let Some(days) = history.days_since_last(time) {
        if days > config.budget_reminder_days {
            notifications.push(Insight::new(
                InsightKind::BudgetReminder,
                format!(
                    "It's been {} days since your last budget analysis. Consider updating your budget!",
                    days
                ),
            ));
        }
    }

    if progress.streak >= config.learning_streak_milestone {
        notifications.push(Insight::new(
            InsightKind::LearningStreak,
            format!(
                "Amazing! You're on a {}-topic learning streak! Keep it up!",
                progress.streak
            ),
        ));
    }

    if let Some(summary) = summary {
        let floor = config.thresholds.savings_critical_below;
        if summary.savings_rate < floor {
            notifications.push(Insight::new(
                InsightKind::LowSavingsWarning,
                format!(
                    "Your savings rate is below {:.0}%. Consider reviewing your expenses or exploring ways to increase income.",
                    floor
                ),
            ));
        }
    }

    debug!(count = notifications.len(), "checked notifications");
    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{generate_budget_summary, ExpenseMap};
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;

    fn summary(income: f64, spend: f64) -> BudgetSummary {
        let expenses = ExpenseMap::from_entries([("Other", spend)]).unwrap();
        generate_budget_summary(income, &expenses).unwrap()
    }

    #[test]
    fn test_budget_reminder_after_thirty_days() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let control = time.test_control().unwrap();
        let mut history = BudgetHistory::new();
        history.record(&summary(4000.0, 3000.0), &time);

        control.advance(Duration::days(29));
        let notes = check_notifications(&history, &LearningProgress::new(), None, &time);
        assert!(notes.is_empty());

        control.advance(Duration::days(2));
        let notes = check_notifications(&history, &LearningProgress::new(), None, &time);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, InsightKind::BudgetReminder);
        assert!(notes[0].message.contains("31 days"));
    }

    #[test]
    fn test_learning_streak_milestone() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let mut progress = LearningProgress::new();
        for i in 0..4 {
            progress.complete_topic(&format!("lesson {}", i), "Beginner", &time);
        }
        assert!(check_notifications(&BudgetHistory::new(), &progress, None, &time).is_empty());

        progress.complete_topic("lesson 4", "Beginner", &time);
        let notes = check_notifications(&BudgetHistory::new(), &progress, None, &time);
        assert_eq!(notes[0].kind, InsightKind::LearningStreak);
        assert!(notes[0].message.contains("5-topic"));
    }

    #[test]
    fn test_low_savings_warning() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let low = summary(3000.0, 2950.0);
        let notes = check_notifications(&BudgetHistory::new(), &LearningProgress::new(), Some(&low), &time);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, InsightKind::LowSavingsWarning);
        assert!(notes[0].message.contains("below 5%"));

        let healthy = summary(3000.0, 2000.0);
        assert!(check_notifications(&BudgetHistory::new(), &LearningProgress::new(), Some(&healthy), &time).is_empty());
    }
}
