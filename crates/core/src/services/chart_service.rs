use crate::models::bucket::BucketState;
use crate::models::category::BucketCategory;
use crate::models::chart::BucketChartEntry;
use crate::models::settings::BudgetSplit;

/// Upper bound for progress-bar percentages.
const DISPLAY_PERCENT_CAP: f64 = 100.0;

/// Generates chart-ready bucket breakdowns.
///
/// The progress percentage is clamped here and only here; `BucketState`
/// keeps the raw (possibly overspent) figures.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One entry per bucket, in `BucketCategory::ALL` order.
    pub fn bucket_breakdown(
        &self,
        state: &BucketState,
        split: &BudgetSplit,
    ) -> Vec<BucketChartEntry> {
        BucketCategory::ALL
            .into_iter()
            .map(|category| {
                let bucket = state.get(category);
                let percent_used = if bucket.allocated > 0.0 {
                    bucket.spent / bucket.allocated * 100.0
                } else {
                    0.0
                };
                BucketChartEntry {
                    category,
                    label: category.label().to_string(),
                    share_pct: split.percentage(category),
                    allocated: bucket.allocated,
                    spent: bucket.spent,
                    remaining: bucket.remaining,
                    percent_used,
                    display_percent: percent_used.min(DISPLAY_PERCENT_CAP),
                }
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
