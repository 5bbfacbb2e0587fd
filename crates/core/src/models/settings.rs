use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::category::BucketCategory;

/// Tolerance used when checking that the split fractions sum to one.
const SPLIT_SUM_TOLERANCE: f64 = 1e-9;

/// Fractions of salary assigned to each bucket.
///
/// Invariant: every fraction is within `[0, 1]` and the three sum to 1.
/// Use [`BudgetSplit::validate`] before trusting a split loaded from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    pub needs: f64,
    pub wants: f64,
    pub future: f64,
}

impl Default for BudgetSplit {
    /// The classic 50/30/20 rule.
    fn default() -> Self {
        Self {
            needs: 0.5,
            wants: 0.3,
            future: 0.2,
        }
    }
}

impl BudgetSplit {
    /// Fraction of salary for a category.
    #[must_use]
    pub fn fraction(&self, category: BucketCategory) -> f64 {
        match category {
            BucketCategory::Needs => self.needs,
            BucketCategory::Wants => self.wants,
            BucketCategory::Future => self.future,
        }
    }

    /// Fraction expressed as a percentage (0.3 → 30.0).
    #[must_use]
    pub fn percentage(&self, category: BucketCategory) -> f64 {
        self.fraction(category) * 100.0
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for category in BucketCategory::ALL {
            let f = self.fraction(category);
            if !f.is_finite() || !(0.0..=1.0).contains(&f) {
                return Err(CoreError::InvalidConfig(format!(
                    "{} fraction must be between 0 and 1, got {f}",
                    category.label()
                )));
            }
        }
        let sum = self.needs + self.wants + self.future;
        if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
            return Err(CoreError::InvalidConfig(format!(
                "Bucket fractions must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }
}

/// How dates are rendered in exports and week labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// `1/7/2024` (month/day/year, no padding)
    #[default]
    UsShort,
    /// `7/1/2024` (day/month/year, no padding)
    EuShort,
    /// `2024-01-07`
    Iso,
}

impl DateFormat {
    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        let pattern = match self {
            DateFormat::UsShort => "%-m/%-d/%Y",
            DateFormat::EuShort => "%-d/%-m/%Y",
            DateFormat::Iso => "%Y-%m-%d",
        };
        date.format(pattern).to_string()
    }
}

/// User-configurable settings for a budget session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Bucket fractions (defaults to 50/30/20).
    #[serde(default)]
    pub split: BudgetSplit,

    /// Date rendering for CSV rows and week labels.
    #[serde(default)]
    pub date_format: DateFormat,
}

impl Settings {
    /// Parse settings from a JSON document and validate the split.
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.split.validate()
    }
}
