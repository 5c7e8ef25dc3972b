use crate::components::notion::CalendarEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Placeholder title for events without one
const UNTITLED: &str = "(untitled)";

/// Message posted when the weekly query returns nothing
const NO_WEEKLY_EVENTS: &str = "No events scheduled for next week.";

/// Grouping key for one calendar day of the weekly digest
///
/// Days sort ascending; events without any date information always group
/// under `Unknown`, which sorts after every dated group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayKey {
    Day(NaiveDate),
    Unknown,
}

impl DayKey {
    /// Derive the grouping key from an event's start date
    fn from_event(event: &CalendarEvent) -> Self {
        match &event.start {
            Some(moment) => DayKey::Day(moment.date()),
            None => DayKey::Unknown,
        }
    }

    /// Section heading for this day
    fn heading(&self) -> String {
        match self {
            DayKey::Day(date) => format!("■ {}", date.format("%m/%d (%a)")),
            DayKey::Unknown => "■ (Unknown date)".to_string(),
        }
    }
}

/// Format one event as a single display line
///
/// The line is `- <time prefix> <attendees> <title>` with empty components
/// omitted. Only a start with time-of-day precision produces a prefix, and
/// the end time is appended only when it carries one too.
pub fn format_event(event: &CalendarEvent) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(start_time) = event.start.as_ref().and_then(|m| m.time_of_day()) {
        match event.end.as_ref().and_then(|m| m.time_of_day()) {
            Some(end_time) => parts.push(format!("{}-{}", start_time, end_time)),
            None => parts.push(start_time),
        }
    }

    if !event.attendees.is_empty() {
        parts.push(event.attendees.join(", "));
    }

    let title = event
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED);
    parts.push(title.to_string());

    format!("- {}", parts.join(" "))
}

/// Build the daily digest, or None when there is nothing to report
///
/// Daily mode posts nothing on an empty day, unlike the weekly digest.
pub fn build_daily(events: &[CalendarEvent], calendar_url: Option<&str>) -> Option<String> {
    if events.is_empty() {
        return None;
    }

    let mut lines = vec!["Today's Calendar Events".to_string()];
    lines.extend(events.iter().map(format_event));
    push_reference(&mut lines, calendar_url);

    Some(lines.join("\n"))
}

/// Build the weekly digest grouped by day
pub fn build_weekly(events: &[CalendarEvent], calendar_url: Option<&str>) -> String {
    if events.is_empty() {
        return NO_WEEKLY_EVENTS.to_string();
    }

    // Group by day, preserving input order within each group
    let mut day_events: BTreeMap<DayKey, Vec<&CalendarEvent>> = BTreeMap::new();
    for event in events {
        day_events
            .entry(DayKey::from_event(event))
            .or_default()
            .push(event);
    }

    let mut lines = vec!["Next Week's Calendar Events".to_string()];
    for (day, grouped) in &day_events {
        lines.push(day.heading());
        lines.extend(grouped.iter().map(|event| format_event(event)));
    }
    push_reference(&mut lines, calendar_url);

    lines.join("\n")
}

/// Append the calendar reference block when a URL is configured
fn push_reference(lines: &mut Vec<String>, calendar_url: Option<&str>) {
    if let Some(url) = calendar_url.filter(|u| !u.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Update/Check Calendar DB: {}", url));
        lines.push("(Please add or edit events in Notion)".to_string());
    }
}
