use crate::config::Config;
use crate::error::{delivery_error, NotifyResult};
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Slack endpoint for posting channel messages
const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Client for delivering digest messages to a Slack channel
pub struct SlackNotifier {
    client: Client,
    token: String,
    channel_id: String,
}

impl SlackNotifier {
    /// Create a new notifier from the application config
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            token: config.slack_bot_token.clone(),
            channel_id: config.slack_channel_id.clone(),
        }
    }

    /// Post a message to the configured channel, single best-effort attempt
    pub async fn post(&self, message: &str) -> NotifyResult<()> {
        let payload = json!({
            "channel": self.channel_id,
            "text": message,
        });

        let response = self
            .client
            .post(POST_MESSAGE_URL)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| delivery_error(&format!("Failed to post message: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(delivery_error(&format!(
                "Message post failed: HTTP {} - {}",
                status, error_body
            )));
        }

        // Slack reports logical failures in a 200 response with ok=false
        let ack: serde_json::Value = response
            .json()
            .await
            .map_err(|e| delivery_error(&format!("Failed to parse post response: {}", e)))?;

        if !ack.get("ok").and_then(|v| v.as_bool()).unwrap_or(false) {
            return Err(delivery_error(&format!("Slack API error: {}", ack)));
        }

        debug!("Message delivered to channel {}", self.channel_id);
        Ok(())
    }
}
