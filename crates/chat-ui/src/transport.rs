//! Seam between the controller and the network

use async_trait::async_trait;
use tripchat_http::{ChatClient, ChatReply, ChatRequest, ClientError};

/// Something that can deliver a chat request and return the agent's reply
///
/// Futures are not `Send` because browser fetch futures are not.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ClientError>;
}

#[async_trait(?Send)]
impl ChatTransport for ChatClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.send_message(request).await
    }
}
