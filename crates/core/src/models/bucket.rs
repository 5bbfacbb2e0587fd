use serde::{Deserialize, Serialize};

use super::category::BucketCategory;

/// Allocation, spending and what is left for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Share of salary assigned to this bucket
    pub allocated: f64,

    /// Sum of expense amounts filed under this bucket
    pub spent: f64,

    /// `allocated - spent`; negative when overspent, never clamped
    pub remaining: f64,
}

impl Bucket {
    pub fn new(allocated: f64, spent: f64) -> Self {
        Self {
            allocated,
            spent,
            remaining: allocated - spent,
        }
    }

    #[must_use]
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Derived view of all three buckets for a salary and an expense list.
///
/// Always recomputed in full; nothing mutates it after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketState {
    pub needs: Bucket,
    pub wants: Bucket,
    pub future: Bucket,
}

impl BucketState {
    /// Get the bucket for a category.
    #[must_use]
    pub fn get(&self, category: BucketCategory) -> &Bucket {
        match category {
            BucketCategory::Needs => &self.needs,
            BucketCategory::Wants => &self.wants,
            BucketCategory::Future => &self.future,
        }
    }

    #[must_use]
    pub fn total_allocated(&self) -> f64 {
        self.needs.allocated + self.wants.allocated + self.future.allocated
    }

    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.needs.spent + self.wants.spent + self.future.spent
    }

    #[must_use]
    pub fn total_remaining(&self) -> f64 {
        self.needs.remaining + self.wants.remaining + self.future.remaining
    }

    /// Categories whose remaining amount has gone negative.
    #[must_use]
    pub fn overspent_categories(&self) -> Vec<BucketCategory> {
        BucketCategory::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_overspent())
            .collect()
    }
}
