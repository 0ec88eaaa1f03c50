use serde::Serialize;

use crate::render::types::StatusView;

/// What a sink is asked to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Message {
    /// Plain text (placeholder and error notices).
    Text(String),
    /// A rendered status view.
    View(StatusView),
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text(text.into())
    }

    /// Plain-text form, terminated by a newline.
    pub fn to_text_block(&self) -> String {
        match self {
            Message::Text(text) => format!("{}\n", text),
            Message::View(view) => view.to_string(),
        }
    }
}

/// Opaque reference to a message a sink has shown.
///
/// Holding a handle is the right to edit that message in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MessageHandle {
    pub id: String,
}

impl MessageHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl std::fmt::Display for MessageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
