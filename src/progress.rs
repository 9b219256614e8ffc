use std::collections::BTreeMap;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

/// number of lessons offered across all learning categories
pub const LEARNING_TOPIC_COUNT: usize = 28;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTopic {
    pub completed_date: NaiveDate,
    pub category: String,
}

/// lessons the user has finished and their running streak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningProgress {
    pub topics: BTreeMap<String, CompletedTopic>,
    pub streak: u32,
}

impl LearningProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// mark a topic finished, returns false if it was already completed
    ///
    /// repeating a topic neither moves its date nor extends the streak
    pub fn complete_topic(
        &mut self,
        topic: &str,
        category: &str,
        time: &SafeTimeProvider,
    ) -> bool {
        if self.topics.contains_key(topic) {
            return false;
        }
        self.topics.insert(
            topic.to_string(),
            CompletedTopic {
                completed_date: time.now().date_naive(),
                category: category.to_string(),
            },
        );
        self.streak += 1;
        true
    }

    pub fn is_completed(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    pub fn completed_count(&self) -> usize {
        self.topics.len()
    }

    /// share of the curriculum completed, in percent
    pub fn completion_percentage(&self) -> f64 {
        let pct = 100.0 * self.completed_count() as f64 / LEARNING_TOPIC_COUNT as f64;
        pct.min(100.0)
    }
}
