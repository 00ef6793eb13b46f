//! Widget configuration

use serde::Deserialize;

/// Settings the host page can override
///
/// Every field has a default, so a host may pass a partial JSON object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Origin of the agent API; the page origin when unset
    pub base_url: Option<String>,
    /// Path of the chat endpoint
    pub endpoint: String,
    pub title: String,
    pub placeholder: String,
    /// Assistant message shown after the conversation is cleared
    pub greeting: String,
    /// Assistant message shown when a request fails
    pub error_message: String,
    /// Request timeout, honoured outside the browser only
    pub timeout_secs: Option<u64>,
}

impl WidgetConfig {
    pub const DEFAULT_ENDPOINT: &'static str = tripchat_http::client::DEFAULT_ENDPOINT;
    pub const DEFAULT_TITLE: &'static str = "Smart Trip Assistant";
    pub const DEFAULT_PLACEHOLDER: &'static str = "Ask about flights, airports or destinations...";
    pub const DEFAULT_GREETING: &'static str = "Chat cleared! How can I help you today?";
    pub const DEFAULT_ERROR_MESSAGE: &'static str = "Error: Could not reach agent.";

    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            title: Self::DEFAULT_TITLE.to_string(),
            placeholder: Self::DEFAULT_PLACEHOLDER.to_string(),
            greeting: Self::DEFAULT_GREETING.to_string(),
            error_message: Self::DEFAULT_ERROR_MESSAGE.to_string(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "/chat/");
        assert_eq!(config.error_message, "Error: Could not reach agent.");
        assert_eq!(config.greeting, "Chat cleared! How can I help you today?");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            WidgetConfig::from_json(r#"{"base_url": "https://trips.example", "title": "Trips"}"#)
                .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://trips.example"));
        assert_eq!(config.title, "Trips");
        assert_eq!(config.endpoint, WidgetConfig::DEFAULT_ENDPOINT);
        assert_eq!(config.placeholder, WidgetConfig::DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_invalid_json() {
        assert!(WidgetConfig::from_json("{not json").is_err());
    }
}
