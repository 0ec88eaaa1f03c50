pub mod errors;
pub mod terminal;
pub mod traits;
pub mod types;
pub mod webhook;

// Re-export commonly used types
pub use errors::SinkError;
pub use terminal::TerminalSink;
pub use traits::MessageSink;
pub use types::{Message, MessageHandle};
pub use webhook::WebhookSink;
