use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AdvisorError, Result};
use crate::types::{Goal, UserType};

/// validated user profile collected during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    pub monthly_income: f64,
    pub goals: BTreeSet<Goal>,
}

impl UserProfile {
    pub fn new(user_type: UserType, monthly_income: f64) -> Result<Self> {
        let profile = Self {
            user_type: Some(user_type),
            monthly_income,
            goals: BTreeSet::new(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.insert(goal);
        self
    }

    pub fn with_goals<I: IntoIterator<Item = Goal>>(mut self, goals: I) -> Self {
        self.goals.extend(goals);
        self
    }

    /// user type for rule selection, general until onboarding sets one
    pub fn effective_user_type(&self) -> UserType {
        self.user_type.unwrap_or_default()
    }

    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    /// true for a profile that was never filled in or was reset
    pub fn is_empty(&self) -> bool {
        self.user_type.is_none() && self.goals.is_empty() && self.monthly_income == 0.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<()> {
        if !self.monthly_income.is_finite() || self.monthly_income < 0.0 {
            warn!(income = self.monthly_income, "rejected profile income");
            return Err(AdvisorError::InvalidProfile {
                message: format!("monthly income must be non-negative, got {}", self.monthly_income),
            });
        }
        Ok(())
    }
}

/// profile fields as submitted by the onboarding collaborator, unvalidated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub user_type: Option<String>,
    pub monthly_income: Option<f64>,
    pub goals: Vec<String>,
}

impl TryFrom<RawProfile> for UserProfile {
    type Error = AdvisorError;

    fn try_from(raw: RawProfile) -> Result<Self> {
        let user_type = raw
            .user_type
            .as_deref()
            .map(str::parse::<UserType>)
            .transpose()?;
        let goals = raw
            .goals
            .iter()
            .map(|g| g.parse::<Goal>())
            .collect::<Result<BTreeSet<Goal>>>()?;

        let profile = UserProfile {
            user_type,
            monthly_income: raw.monthly_income.unwrap_or(0.0),
            goals,
        };
        profile.validate()?;
        Ok(profile)
    }
}
