use super::models::{CalendarEvent, EventMoment};
use super::time::next_week_range;
use crate::config::Config;
use crate::error::{source_error, NotifyResult};
use chrono::Local;
use reqwest::Client;
use serde_json::json;
use tracing::debug;
use url::Url;

/// Notion API version sent with every request
const NOTION_VERSION: &str = "2022-06-28";

/// Client for querying calendar events from a Notion database
pub struct NotionClient {
    client: Client,
    api_key: String,
    database_id: String,
}

impl NotionClient {
    /// Create a new client from the application config
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.notion_api_key.clone(),
            database_id: config.notion_database_id.clone(),
        }
    }

    /// Fetch events whose date is exactly today
    pub async fn fetch_today(&self) -> NotifyResult<Vec<CalendarEvent>> {
        let today = Local::now().date_naive();
        let filter = json!({
            "filter": {
                "property": "Date",
                "date": { "equals": today.format("%Y-%m-%d").to_string() }
            }
        });
        self.query(filter).await
    }

    /// Fetch events falling within next week (Monday to Sunday, inclusive)
    pub async fn fetch_next_week(&self) -> NotifyResult<Vec<CalendarEvent>> {
        let (start, end) = next_week_range(Local::now().date_naive());
        let filter = json!({
            "filter": {
                "and": [
                    { "property": "Date", "date": { "on_or_after": start.format("%Y-%m-%d").to_string() } },
                    { "property": "Date", "date": { "on_or_before": end.format("%Y-%m-%d").to_string() } }
                ]
            }
        });
        self.query(filter).await
    }

    /// Run a database query with the given filter and extract events
    async fn query(&self, filter: serde_json::Value) -> NotifyResult<Vec<CalendarEvent>> {
        let url = Url::parse(&format!(
            "https://api.notion.com/v1/databases/{}/query",
            self.database_id
        ))
        .map_err(|e| source_error(&format!("Failed to build query URL: {}", e)))?;

        // Make API request
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Notion-Version", NOTION_VERSION)
            .json(&filter)
            .send()
            .await
            .map_err(|e| source_error(&format!("Failed to query database: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(source_error(&format!(
                "Database query failed: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| source_error(&format!("Failed to parse query response: {}", e)))?;

        // An empty results array is a valid outcome; a missing one is not
        let pages = response_data
            .get("results")
            .and_then(|r| r.as_array())
            .ok_or_else(|| source_error("No results in query response"))?;

        debug!("Query returned {} page(s)", pages.len());

        Ok(pages.iter().map(extract_event).collect())
    }
}

/// Convert one result page into a CalendarEvent
///
/// Missing or malformed optional properties degrade to empty fields rather
/// than failing the fetch.
fn extract_event(page: &serde_json::Value) -> CalendarEvent {
    let properties = page.get("properties");

    let title = properties
        .and_then(|p| p.get("Name"))
        .and_then(|n| n.get("title"))
        .and_then(|t| t.as_array())
        .and_then(|t| t.first())
        .and_then(|t| t.get("plain_text"))
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string());

    let date_info = properties
        .and_then(|p| p.get("Date"))
        .and_then(|d| d.get("date"));

    let start = date_info
        .and_then(|d| d.get("start"))
        .and_then(|s| s.as_str())
        .and_then(EventMoment::parse);

    let end = date_info
        .and_then(|d| d.get("end"))
        .and_then(|e| e.as_str())
        .and_then(EventMoment::parse);

    let attendees = properties
        .and_then(|p| p.get("Person"))
        .and_then(|p| p.get("people"))
        .and_then(|p| p.as_array())
        .map(|people| {
            people
                .iter()
                .filter_map(|person| person.get("name").and_then(|n| n.as_str()))
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string())
                .collect()
        })
        .unwrap_or_default();

    CalendarEvent {
        title,
        start,
        end,
        attendees,
    }
}
