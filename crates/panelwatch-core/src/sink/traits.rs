use std::future::Future;

use super::errors::SinkError;
use super::types::{Message, MessageHandle};

/// Somewhere a status message can be shown and later edited in place.
pub trait MessageSink: Send {
    /// Show a new message and return the handle used to edit it.
    fn send(
        &mut self,
        message: &Message,
    ) -> impl Future<Output = Result<MessageHandle, SinkError>> + Send;

    /// Replace the content of a message shown earlier.
    ///
    /// Returns [`SinkError::NotEditable`] when the handle no longer refers to
    /// something this sink can edit.
    fn edit(
        &mut self,
        handle: &MessageHandle,
        message: &Message,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}
