use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::settings::Settings;

/// Session state: the salary, every expense logged so far, and settings.
///
/// Lives in memory only. Bucket figures and weekly summaries are derived from it
/// on demand and never stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Salary to split across buckets
    pub salary: f64,

    /// Expenses in the order they were recorded (oldest first)
    pub expenses: Vec<Expense>,

    pub settings: Settings,
}
