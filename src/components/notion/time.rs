use chrono::{Datelike, Duration, NaiveDate};

/// Date range for next week (Monday to Sunday, inclusive)
///
/// The range always starts on the Monday after the current week, so a Monday
/// input still yields a range starting seven days ahead.
pub fn next_week_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_until_monday = 7 - i64::from(today.weekday().num_days_from_monday());
    let start = today + Duration::days(days_until_monday);
    (start, start + Duration::days(6))
}
