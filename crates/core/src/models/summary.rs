use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category::BucketCategory;
use super::settings::DateFormat;

/// Identity of a Sunday-starting calendar week.
///
/// Holds the Sunday that opens the week. Display text is produced separately by
/// [`WeekKey::label`], so grouping never depends on locale formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekKey {
    pub start: NaiveDate,
}

impl WeekKey {
    /// Key for the week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: crate::dates::week_start(date),
        }
    }

    /// Saturday closing the week.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        crate::dates::week_end(self.start)
    }

    /// Human-readable label, e.g. "Week of 1/7/2024".
    #[must_use]
    pub fn label(&self, format: DateFormat) -> String {
        format!("Week of {}", format.format(self.start))
    }
}

/// Per-category subtotals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub needs: f64,
    pub wants: f64,
    pub future: f64,
}

impl CategoryTotals {
    #[must_use]
    pub fn get(&self, category: BucketCategory) -> f64 {
        match category {
            BucketCategory::Needs => self.needs,
            BucketCategory::Wants => self.wants,
            BucketCategory::Future => self.future,
        }
    }

    pub fn add(&mut self, category: BucketCategory, amount: f64) {
        match category {
            BucketCategory::Needs => self.needs += amount,
            BucketCategory::Wants => self.wants += amount,
            BucketCategory::Future => self.future += amount,
        }
    }
}

/// Running totals for one week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekTotals {
    pub total: f64,
    pub count: usize,
    pub by_category: CategoryTotals,
}

/// Expenses grouped by week.
///
/// Weeks keep the order in which they first appear in the expense list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySummary {
    weeks: Vec<(WeekKey, WeekTotals)>,
    #[serde(skip)]
    index: HashMap<WeekKey, usize>,
}

impl WeeklySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals for `key`, inserting an empty entry on first sight.
    pub(crate) fn entry(&mut self, key: WeekKey) -> &mut WeekTotals {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.weeks.push((key, WeekTotals::default()));
                let idx = self.weeks.len() - 1;
                self.index.insert(key, idx);
                idx
            }
        };
        &mut self.weeks[idx].1
    }

    #[must_use]
    pub fn get(&self, key: &WeekKey) -> Option<&WeekTotals> {
        self.index.get(key).map(|&idx| &self.weeks[idx].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Weeks in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&WeekKey, &WeekTotals)> {
        self.weeks.iter().map(|(k, v)| (k, v))
    }

    /// Weeks ordered oldest first.
    #[must_use]
    pub fn sorted_chronologically(&self) -> Vec<(WeekKey, WeekTotals)> {
        let mut weeks = self.weeks.clone();
        weeks.sort_by_key(|(k, _)| *k);
        weeks
    }
}
