use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::BucketCategory;

/// A single logged expense.
///
/// Expenses are immutable once recorded. There is no edit or delete operation;
/// the list only ever grows during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: Uuid,

    /// Amount spent (non-negative)
    pub amount: f64,

    /// Free-text description (typed or dictated)
    pub description: String,

    /// Bucket this expense counts against
    pub category: BucketCategory,

    /// Local wall-clock time the expense was recorded
    pub timestamp: NaiveDateTime,
}

impl Expense {
    /// Create an expense stamped with the current local time.
    pub fn new(amount: f64, description: impl Into<String>, category: BucketCategory) -> Self {
        Self::at(amount, description, category, Local::now().naive_local())
    }

    /// Create an expense at an explicit point in time.
    pub fn at(
        amount: f64,
        description: impl Into<String>,
        category: BucketCategory,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category,
            timestamp,
        }
    }

    /// Calendar date of the expense.
    #[must_use]
    pub fn date(&self) -> chrono::NaiveDate {
        self.timestamp.date()
    }
}
