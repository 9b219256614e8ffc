use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::budget::analyzer::BudgetSummary;

/// a dated record of one budget analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub date: NaiveDate,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub savings_rate: f64,
}

/// change in monthly savings between the first and latest snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SavingsTrend {
    Improved(f64),
    Declined(f64),
    Unchanged,
}

impl SavingsTrend {
    pub fn message(&self) -> String {
        match self {
            SavingsTrend::Improved(delta) => format!(
                "Amazing progress! You've increased your monthly savings by ${:.0}!",
                delta
            ),
            SavingsTrend::Declined(delta) => format!(
                "Your savings decreased by ${:.0}. Let's identify areas for improvement.",
                delta
            ),
            SavingsTrend::Unchanged => "Your savings have remained consistent.".to_string(),
        }
    }
}

/// append-only budget history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetHistory {
    snapshots: Vec<BudgetSnapshot>,
}

impl BudgetHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// record a summary dated with the provider's current day
    pub fn record(&mut self, summary: &BudgetSummary, time: &SafeTimeProvider) -> &BudgetSnapshot {
        let snapshot = BudgetSnapshot {
            date: time.now().date_naive(),
            income: summary.total_income,
            expenses: summary.total_expenses,
            savings: summary.savings,
            savings_rate: summary.savings_rate,
        };
        debug!(date = %snapshot.date, savings = snapshot.savings, "recorded budget snapshot");
        self.push(snapshot)
    }

    /// append an already dated snapshot, e.g. one restored from an export
    pub fn push(&mut self, snapshot: BudgetSnapshot) -> &BudgetSnapshot {
        self.snapshots.push(snapshot);
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn latest(&self) -> Option<&BudgetSnapshot> {
        self.snapshots.last()
    }

    pub fn snapshots(&self) -> &[BudgetSnapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// whole days between the latest snapshot and now
    pub fn days_since_last(&self, time: &SafeTimeProvider) -> Option<i64> {
        let today = time.now().date_naive();
        self.latest().map(|s| (today - s.date).num_days())
    }

    /// compare savings of the first and latest snapshots
    pub fn savings_trend(&self) -> Option<SavingsTrend> {
        if self.snapshots.len() < 2 {
            return None;
        }
        let first = self.snapshots.first()?.savings;
        let latest = self.snapshots.last()?.savings;
        let delta = latest - first;

        Some(if delta > 0.0 {
            SavingsTrend::Improved(delta)
        } else if delta < 0.0 {
            SavingsTrend::Declined(delta.abs())
        } else {
            SavingsTrend::Unchanged
        })
    }
}

impl From<Vec<BudgetSnapshot>> for BudgetHistory {
    fn from(snapshots: Vec<BudgetSnapshot>) -> Self {
        Self { snapshots }
    }
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
    fn test_record_uses_provider_date() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
        ));
        let mut history = BudgetHistory::new();
        let snapshot = history.record(&summary(4000.0, 3000.0), &time);

        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(snapshot.savings, 1000.0);
        assert_eq!(snapshot.savings_rate, 25.0);
    }

    #[test]
    fn test_days_since_last() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let control = time.test_control().unwrap();

        let mut history = BudgetHistory::new();
        assert_eq!(history.days_since_last(&time), None);

        history.record(&summary(4000.0, 3000.0), &time);
        control.advance(Duration::days(45));
        assert_eq!(history.days_since_last(&time), Some(45));
    }

    #[test]
    fn test_savings_trend() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let control = time.test_control().unwrap();
        let mut history = BudgetHistory::new();

        history.record(&summary(4000.0, 3500.0), &time);
        assert_eq!(history.savings_trend(), None);

        control.advance(Duration::days(30));
        history.record(&summary(4000.0, 3200.0), &time);
        let trend = history.savings_trend().unwrap();
        assert_eq!(trend, SavingsTrend::Improved(300.0));
        assert!(trend.message().contains("$300"));

        control.advance(Duration::days(30));
        history.record(&summary(4000.0, 3600.0), &time);
        assert_eq!(history.savings_trend(), Some(SavingsTrend::Declined(100.0)));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_serializes_as_list() {
        let history = BudgetHistory::from(vec![BudgetSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            income: 3000.0,
            expenses: 2000.0,
            savings: 1000.0,
            savings_rate: 33.3,
        }]);
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["date"], "2024-05-01");
    }
}
