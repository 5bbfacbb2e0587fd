use serde::{Deserialize, Serialize};

use super::category::BucketCategory;

/// One bar of the bucket breakdown chart.
///
/// The core computes all the numbers; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketChartEntry {
    pub category: BucketCategory,

    /// Display name ("Needs", "Wants", "Future")
    pub label: String,

    /// Nominal share of salary in percent (50, 30, 20 by default)
    pub share_pct: f64,

    pub allocated: f64,
    pub spent: f64,

    /// May be negative
    pub remaining: f64,

    /// `spent / allocated * 100`, unclamped; 0 when nothing is allocated
    pub percent_used: f64,

    /// `percent_used` capped at 100 for progress bars
    pub display_percent: f64,
}

impl BucketChartEntry {
    #[must_use]
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}
