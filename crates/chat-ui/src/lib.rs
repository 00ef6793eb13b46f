//! Chat widget for the trip-planning agent
//!
//! [`ChatController`] holds the conversation and session, [`render`] turns
//! reply text into display markup, and [`ChatWidget`] wires both into a Yew
//! component that talks to the agent through [`tripchat_http::ChatClient`].

pub mod client;
pub mod components;
pub mod config;
pub mod controller;
pub mod parsers;
pub mod render;
pub mod session;
pub mod styles;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main components
pub use components::{ChatHeader, ChatInput, ChatWidget, Message, MessageList, TypingIndicator};
pub use config::WidgetConfig;
pub use controller::{ChatAction, ChatController, OutgoingRequest, RequestState, SubmitRejected};
pub use parsers::{FlightLeg, FlightSegmentBlock, ReplyContent, parse_reply};
pub use render::render;
pub use session::Session;
pub use transport::ChatTransport;
pub use types::{ChatMessage, Role};
