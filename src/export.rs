//! json interchange document for profile, chat and budget history
//!
//! The crate only builds and parses the document; reading and writing files
//! is left to the caller.

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::budget::BudgetHistory;
use crate::errors::{AdvisorError, Result};
use crate::profile::UserProfile;
use crate::progress::LearningProgress;

/// version tag written into every export
pub const APP_VERSION: &str = "2.0_enhanced";

const REQUIRED_FIELDS: [&str; 4] = ["user_profile", "chat_history", "budget_history", "learning_progress"];

/// one question and the assistant's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub question: String,
    pub response: String,
    pub timestamp: String,
}

/// everything a session can export and later restore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub user_profile: UserProfile,
    pub chat_history: Vec<ChatExchange>,
    pub budget_history: BudgetHistory,
    pub learning_progress: LearningProgress,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_version: Option<String>,
}

impl ExportDocument {
    /// snapshot session data, stamped with the provider's current time
    pub fn new(
        user_profile: UserProfile,
        chat_history: Vec<ChatExchange>,
        budget_history: BudgetHistory,
        learning_progress: LearningProgress,
        time: &SafeTimeProvider,
    ) -> Self {
        Self {
            user_profile,
            chat_history,
            budget_history,
            learning_progress,
            export_date: Some(time.now()),
            app_version: Some(APP_VERSION.to_string()),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// parse an export, requiring all four data sections
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or_else(|| AdvisorError::InvalidExport {
            message: "export document must be a json object".to_string(),
        })?;

        if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !object.contains_key(**f)) {
            warn!(field = *field, "rejected export document");
            return Err(AdvisorError::MissingExportField { field: *field });
        }

        let document: ExportDocument = serde_json::from_value(value)?;
        document.user_profile.validate()?;
        debug!(
            snapshots = document.budget_history.len(),
            messages = document.chat_history.len(),
            "imported export document"
        );
        Ok(document)
    }

    /// onboarding counts as done when the restored profile has content
    pub fn onboarding_complete(&self) -> bool {
        !self.user_profile.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{generate_budget_summary, ExpenseMap};
    use crate::types::{Goal, UserType};
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;

    fn sample_document(time: &SafeTimeProvider) -> ExportDocument {
        let profile = UserProfile::new(UserType::Student, 1500.0)
            .unwrap()
            .with_goal(Goal::EmergencyFund);
        let expenses = ExpenseMap::from_entries([("Housing", 600.0), ("Food", 300.0)]).unwrap();
        let summary = generate_budget_summary(1500.0, &expenses).unwrap();

        let mut history = BudgetHistory::new();
        history.record(&summary, time);

        let mut progress = LearningProgress::new();
        progress.complete_topic("What are stocks, bonds, and ETFs?", "Beginner", time);

        let chat = vec![ChatExchange {
            question: "How do I start budgeting?".to_string(),
            response: "Start by tracking every expense for a month.".to_string(),
            timestamp: "09:30".to_string(),
        }];

        ExportDocument::new(profile, chat, history, progress, time)
    }

    #[test]
    fn test_export_round_trip() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 2, 10, 9, 30, 0).unwrap()
        ));
        let document = sample_document(&time);
        let json = document.to_json_pretty().unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["app_version"], APP_VERSION);
        assert_eq!(value["user_profile"]["user_type"], "student");
        assert_eq!(value["budget_history"][0]["date"], "2024-02-10");

        let restored = ExportDocument::from_json(&json).unwrap();
        assert_eq!(restored, document);
        assert!(restored.onboarding_complete());
    }

    #[test]
    fn test_missing_section_rejected() {
        let json = r#"{"user_profile": {}, "chat_history": [], "budget_history": []}"#;
        let err = ExportDocument::from_json(json).unwrap_err();
        assert!(matches!(err, AdvisorError::MissingExportField { field: "learning_progress" }));
        assert!(err.is_validation());
    }

    #[test]
    fn test_minimal_import() {
        let json = r#"{"user_profile": {}, "chat_history": [], "budget_history": [], "learning_progress": {}}"#;
        let document = ExportDocument::from_json(json).unwrap();
        assert!(!document.onboarding_complete());
        assert!(document.export_date.is_none());
        assert!(document.budget_history.is_empty());
    }

    #[test]
    fn test_invalid_json_and_profile() {
        assert!(matches!(
            ExportDocument::from_json("not json"),
            Err(AdvisorError::Serialization(_))
        ));

        let err = ExportDocument::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidExport { .. }));
        assert_eq!(err.to_string(), "invalid export document: export document must be a json object");

        let json = r#"{"user_profile": {"monthly_income": -10.0}, "chat_history": [], "budget_history": [], "learning_progress": {}}"#;
        assert!(ExportDocument::from_json(json).unwrap_err().is_validation());
    }
}
