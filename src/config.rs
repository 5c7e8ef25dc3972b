use crate::error::{env_error, NotifyResult};
use dotenvy::dotenv;
use std::env;

/// Main configuration structure for the bridge
#[derive(Debug, Clone)]
pub struct Config {
    /// Notion integration token
    pub notion_api_key: String,
    /// Notion database ID holding the calendar
    pub notion_database_id: String,
    /// Slack bot token used for posting
    pub slack_bot_token: String,
    /// Slack channel ID receiving the digests
    pub slack_channel_id: String,
    /// Human-facing URL of the calendar database
    pub calendar_db_url: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> NotifyResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let notion_api_key = required_var("NOTION_API_KEY")?;
        let notion_database_id = required_var("NOTION_DATABASE_ID")?;
        let slack_bot_token = required_var("SLACK_BOT_TOKEN")?;
        let slack_channel_id = required_var("SLACK_CHANNEL_ID")?;

        // Derive the human-facing database URL unless one is set explicitly
        let calendar_db_url = env::var("NOTION_CALENDAR_DB_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "https://www.notion.so/{}",
                    notion_database_id.replace('-', "")
                )
            });

        Ok(Config {
            notion_api_key,
            notion_database_id,
            slack_bot_token,
            slack_channel_id,
            calendar_db_url,
        })
    }
}

/// Read a required environment variable, trimming surrounding whitespace
fn required_var(name: &str) -> NotifyResult<String> {
    let value = env::var(name).map_err(|_| env_error(name))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(env_error(name));
    }
    Ok(value)
}
