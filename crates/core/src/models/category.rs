use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One of the three fixed budget buckets an expense is filed under.
///
/// The set is closed: every per-category computation matches on all three variants,
/// so adding a bucket is a compile error everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketCategory {
    /// Essentials: rent, groceries, utilities
    Needs,
    /// Discretionary spending
    Wants,
    /// Savings, investments, debt payoff
    Future,
}

impl BucketCategory {
    /// All categories in display order.
    pub const ALL: [BucketCategory; 3] = [
        BucketCategory::Needs,
        BucketCategory::Wants,
        BucketCategory::Future,
    ];

    /// Raw lowercase identifier, as written to CSV and JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketCategory::Needs => "needs",
            BucketCategory::Wants => "wants",
            BucketCategory::Future => "future",
        }
    }

    /// Capitalized human-readable name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BucketCategory::Needs => "Needs",
            BucketCategory::Wants => "Wants",
            BucketCategory::Future => "Future",
        }
    }
}

impl std::fmt::Display for BucketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BucketCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" => Ok(BucketCategory::Needs),
            "wants" => Ok(BucketCategory::Wants),
            "future" => Ok(BucketCategory::Future),
            other => Err(CoreError::ValidationError(format!(
                "Unknown category '{other}': expected one of needs, wants, future"
            ))),
        }
    }
}
