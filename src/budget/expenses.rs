use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AdvisorError, Result};
use crate::types::ExpenseCategory;

/// monthly spend per category, validated on the way in
///
/// Serializes as a plain `{"Category": amount}` object; deserializing goes
/// through the same checks as [`ExpenseMap::from_entries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ExpenseMap {
    amounts: BTreeMap<ExpenseCategory, f64>,
}

impl ExpenseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// build from raw `(category name, amount)` pairs as submitted by a form
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut map = ExpenseMap::new();
        for (name, amount) in entries {
            let category: ExpenseCategory = name.as_ref().parse().map_err(|err| {
                warn!(category = name.as_ref(), "rejected unknown expense category");
                err
            })?;
            if map.amounts.contains_key(&category) {
                return Err(AdvisorError::DuplicateCategory {
                    category: category.to_string(),
                });
            }
            map.insert(category, amount)?;
        }
        Ok(map)
    }

    /// set the amount for a category, replacing any previous value
    pub fn insert(&mut self, category: ExpenseCategory, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            warn!(%category, amount, "rejected expense amount");
            return Err(AdvisorError::NegativeAmount {
                category: category.to_string(),
                amount,
            });
        }
        self.amounts.insert(category, amount);
        Ok(())
    }

    /// builder-style insert
    pub fn with(mut self, category: ExpenseCategory, amount: f64) -> Result<Self> {
        self.insert(category, amount)?;
        Ok(self)
    }

    pub fn get(&self, category: ExpenseCategory) -> Option<f64> {
        self.amounts.get(&category).copied()
    }

    /// exact sum of all amounts
    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, f64)> + '_ {
        self.amounts.iter().map(|(c, a)| (*c, *a))
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for ExpenseMap {
    type Error = AdvisorError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self> {
        ExpenseMap::from_entries(raw)
    }
}

impl From<ExpenseMap> for BTreeMap<String, f64> {
    fn from(map: ExpenseMap) -> Self {
        map.amounts
            .into_iter()
            .map(|(category, amount)| (category.to_string(), amount))
            .collect()
    }
}
