use crate::render;
use std::fmt;

/// Who sent a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label shown under the message bubble
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// A message in the conversation view
///
/// The rendered form is produced once, when the message is created, and the
/// raw text is kept untouched next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    sender: Role,
    text: String,
    rendered: String,
}

impl ChatMessage {
    /// Create a message and render it for its role
    pub fn new(sender: Role, text: impl Into<String>) -> Self {
        let text = text.into();
        let rendered = render::render(&text, sender);
        Self {
            sender,
            text,
            rendered,
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn sender(&self) -> Role {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// HTML fragment for display
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}
