mod chat_header;
mod chat_input;
mod chat_widget;
mod message;
mod message_list;
mod typing_indicator;

pub use chat_header::ChatHeader;
pub use chat_input::ChatInput;
pub use chat_widget::ChatWidget;
pub use message::Message;
pub use message_list::MessageList;
pub use typing_indicator::TypingIndicator;
