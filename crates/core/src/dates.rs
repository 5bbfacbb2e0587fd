use chrono::{Datelike, Days, NaiveDate};

// Calendar arithmetic for weekly grouping. Locale-free: display formatting
// lives in `models::settings::DateFormat`.

/// Sunday opening the week that contains `date`.
///
/// Saturates at `NaiveDate::MIN` when that Sunday is outside chrono's range.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Saturday closing the week that starts on `start`.
///
/// Saturates at `NaiveDate::MAX`.
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
}

/// Whether two dates fall in the same Sunday-to-Saturday window.
pub fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    week_start(a) == week_start(b)
}
