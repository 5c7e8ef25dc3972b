use chrono::{NaiveDate, NaiveDateTime};

/// Simplified calendar event representation
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct CalendarEvent {
    pub title: Option<String>,
    pub start: Option<EventMoment>,
    pub end: Option<EventMoment>,
    pub attendees: Vec<String>,
}

/// One end of an event's date range, tagged with its precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EventMoment {
    /// Date-only value with no time-of-day
    Date(NaiveDate),
    /// Full date-and-time value
    DateTime(NaiveDateTime),
}

impl EventMoment {
    /// Parse an ISO-8601 value from the API
    ///
    /// A `T` separator marks date-time precision; only the `HH:MM` part of
    /// the time is kept, tolerating seconds, fractions and offset suffixes.
    /// Values that parse as neither form are treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.split_once('T') {
            Some((date, time)) => {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
                let hour = time.get(0..2)?.parse::<u32>().ok()?;
                if time.get(2..3)? != ":" {
                    return None;
                }
                let minute = time.get(3..5)?.parse::<u32>().ok()?;
                let dt = date.and_hms_opt(hour, minute, 0)?;
                Some(EventMoment::DateTime(dt))
            }
            None => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(EventMoment::Date),
        }
    }

    /// Calendar date of this moment
    pub fn date(&self) -> NaiveDate {
        match self {
            EventMoment::Date(date) => *date,
            EventMoment::DateTime(dt) => dt.date(),
        }
    }

    /// Time-of-day as `HH:MM`, when this moment carries one
    pub fn time_of_day(&self) -> Option<String> {
        match self {
            EventMoment::Date(_) => None,
            EventMoment::DateTime(dt) => Some(dt.format("%H:%M").to_string()),
        }
    }
}
