//! Chat endpoint HTTP client

pub mod chat;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Default path of the chat endpoint
pub const DEFAULT_ENDPOINT: &str = "/chat/";

/// Client for the agent's chat endpoint
#[derive(Clone, Debug)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    endpoint: String,
}

impl ChatClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the chat endpoint path
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Create a request builder for a path below the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and decode a JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for ChatClient
#[derive(Default)]
pub struct ChatClientBuilder {
    base_url: Option<String>,
    endpoint: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    #[cfg(not(target_arch = "wasm32"))]
    user_agent: Option<String>,
}

impl ChatClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the chat endpoint path (defaults to `/chat/`)
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[cfg(not(target_arch = "wasm32"))]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ChatClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if !endpoint.starts_with('/') {
            return Err(ClientError::Configuration(format!(
                "endpoint must start with '/': {endpoint}"
            )));
        }

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder.user_agent(
                self.user_agent
                    .unwrap_or_else(|| concat!("tripchat/", env!("CARGO_PKG_VERSION")).to_string()),
            );
        }

        let client = client_builder.build()?;

        Ok(ChatClient {
            client,
            base_url,
            endpoint,
        })
    }
}
