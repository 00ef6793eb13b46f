//! Chat endpoint client methods

use super::{ClientError, ChatClient};
use crate::types::{ChatReply, ChatRequest};

impl ChatClient {
    /// Send one user message and wait for the agent's reply
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            session_id = %request.session_id,
            "sending chat message"
        );
        let req = self
            .request(reqwest::Method::POST, &self.endpoint)
            .json(request);
        self.execute(req).await
    }
}
