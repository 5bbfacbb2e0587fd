use tracing::debug;

use crate::models::bucket::{Bucket, BucketState};
use crate::models::category::BucketCategory;
use crate::models::expense::Expense;
use crate::models::settings::BudgetSplit;
use crate::models::summary::CategoryTotals;

/// Splits a salary across the three buckets and tallies spending against each.
///
/// Pure business logic: no I/O, no state between calls. The caller re-invokes
/// `allocate` whenever the salary or the expense list changes.
pub struct AllocationService {
    split: BudgetSplit,
}

impl AllocationService {
    pub fn new(split: BudgetSplit) -> Self {
        Self { split }
    }

    #[must_use]
    pub fn split(&self) -> &BudgetSplit {
        &self.split
    }

    /// Compute allocated/spent/remaining for every bucket.
    ///
    /// Overspending is representable: `remaining` goes negative and is never clamped.
    /// A negative salary is passed through as-is.
    pub fn allocate(&self, salary: f64, expenses: &[Expense]) -> BucketState {
        let mut spent = CategoryTotals::default();
        for expense in expenses {
            spent.add(expense.category, expense.amount);
        }

        let bucket = |category: BucketCategory| {
            Bucket::new(salary * self.split.fraction(category), spent.get(category))
        };

        let state = BucketState {
            needs: bucket(BucketCategory::Needs),
            wants: bucket(BucketCategory::Wants),
            future: bucket(BucketCategory::Future),
        };

        debug!(
            salary,
            expenses = expenses.len(),
            spent = state.total_spent(),
            "computed bucket allocation"
        );
        for category in state.overspent_categories() {
            debug!(
                category = %category,
                remaining = state.get(category).remaining,
                "bucket overspent"
            );
        }

        state
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new(BudgetSplit::default())
    }
}
