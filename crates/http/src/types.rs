//! Wire types for the chat endpoint

use serde::{Deserialize, Serialize};

/// Body of `POST /chat/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: session_id.into(),
        }
    }
}

/// Agent reply
///
/// The server may hand back its own session identifier, which then replaces
/// the one the widget generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatReply {
    /// Session identifier assigned by the server, ignoring empty values
    pub fn assigned_session(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_fields() {
        let request = ChatRequest::new("Flights to Lisbon?", "session_abc123xyz");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"message": "Flights to Lisbon?", "session_id": "session_abc123xyz"})
        );
    }

    #[test]
    fn test_reply_without_session_id() {
        let reply: ChatReply = serde_json::from_str(r#"{"response": "hi"}"#).unwrap();
        assert_eq!(reply.response, "hi");
        assert_eq!(reply.assigned_session(), None);
    }

    #[test]
    fn test_reply_with_null_or_empty_session_id() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response": "hi", "session_id": null}"#).unwrap();
        assert_eq!(reply.assigned_session(), None);

        let reply: ChatReply =
            serde_json::from_str(r#"{"response": "hi", "session_id": ""}"#).unwrap();
        assert_eq!(reply.assigned_session(), None);
    }

    #[test]
    fn test_reply_missing_response_is_rejected() {
        let result = serde_json::from_str::<ChatReply>(r#"{"session_id": "s1"}"#);
        assert!(result.is_err());
    }
}
