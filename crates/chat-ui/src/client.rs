//! Client construction from widget configuration

use crate::config::WidgetConfig;
use tripchat_http::{ChatClient, ClientError};
use web_sys::window;

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window()
        && let Ok(location) = window.location().origin()
    {
        return location;
    }

    // Default to relative URLs
    String::new()
}

/// Build the chat client described by `config`
pub fn create_chat_client(config: &WidgetConfig) -> Result<ChatClient, ClientError> {
    let base_url = config.base_url.clone().unwrap_or_else(get_base_url);

    #[allow(unused_mut)]
    let mut builder = ChatClient::builder()
        .base_url(base_url)
        .endpoint(config.endpoint.clone());

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }

    builder.build()
}
