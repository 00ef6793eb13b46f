//! HTTP client for the trip-planning agent's chat endpoint
//!
//! The same client is used natively (tests, tooling) and in the browser,
//! where reqwest issues requests through `fetch`.

pub mod client;
pub mod types;

pub use client::{ChatClient, ChatClientBuilder, error::ClientError};
pub use types::{ChatReply, ChatRequest};
