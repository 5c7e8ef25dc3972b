use calnotify::components::notion::{CalendarEvent, EventMoment};
use calnotify::digest;
use calnotify::error::NotifyResult;

/// Mock implementation of the Notion event source for testing
#[derive(Debug, Clone, Default)]
pub struct MockEventSource {
    events: Vec<CalendarEvent>,
}

impl MockEventSource {
    /// Create a new mock source with predefined events
    pub fn new() -> Self {
        let events = vec![
            CalendarEvent {
                title: Some("Sprint planning".to_string()),
                start: EventMoment::parse("2024-06-03T09:00"),
                end: EventMoment::parse("2024-06-03T10:00"),
                attendees: vec!["Aoki".to_string()],
            },
            CalendarEvent {
                title: Some("Release review".to_string()),
                start: EventMoment::parse("2024-06-05T14:00"),
                end: None,
                attendees: Vec::new(),
            },
        ];

        Self { events }
    }

    /// Create a mock source that returns no events
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Get events from the mock
    pub async fn fetch_events(&self) -> NotifyResult<Vec<CalendarEvent>> {
        Ok(self.events.clone())
    }
}

/// Test that demonstrates how to use the mock
#[tokio::test]
async fn test_event_source_mock() {
    let source = MockEventSource::new();

    let events = source.fetch_events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title.as_deref(), Some("Sprint planning"));
    assert_eq!(events[1].title.as_deref(), Some("Release review"));
}

/// Test building the weekly digest from mocked events
#[tokio::test]
async fn test_weekly_digest_from_mock() {
    let source = MockEventSource::new();
    let events = source.fetch_events().await.unwrap();

    let message = digest::build_weekly(&events, None);
    let lines: Vec<&str> = message.lines().collect();

    assert_eq!(lines[0], "Next Week's Calendar Events");
    assert_eq!(lines[1], "■ 06/03 (Mon)");
    assert_eq!(lines[2], "- 09:00-10:00 Aoki Sprint planning");
    assert_eq!(lines[3], "■ 06/05 (Wed)");
    assert_eq!(lines[4], "- 14:00 Release review");
}

/// Test that an empty fetch yields the weekly placeholder but no daily digest
#[tokio::test]
async fn test_empty_digests_from_mock() {
    let source = MockEventSource::empty();
    let events = source.fetch_events().await.unwrap();

    assert!(digest::build_daily(&events, None).is_none());
    assert_eq!(
        digest::build_weekly(&events, None),
        "No events scheduled for next week."
    );
}
