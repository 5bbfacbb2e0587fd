use tracing::debug;

use crate::models::expense::Expense;
use crate::models::summary::{WeekKey, WeeklySummary};

/// Groups expenses into Sunday-starting weeks.
///
/// Recomputed from the full expense list on every call; nothing is cached.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Total, count and per-bucket subtotal for each week that has expenses.
    /// Weeks appear in the order their first expense appears in `expenses`.
    pub fn weekly_summary(&self, expenses: &[Expense]) -> WeeklySummary {
        let mut summary = WeeklySummary::new();

        for expense in expenses {
            let week = summary.entry(WeekKey::containing(expense.date()));
            week.total += expense.amount;
            week.count += 1;
            week.by_category.add(expense.category, expense.amount);
        }

        debug!(
            expenses = expenses.len(),
            weeks = summary.len(),
            "computed weekly summary"
        );
        summary
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
