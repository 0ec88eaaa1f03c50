//! Sink that draws the status block on a terminal.
//!
//! On an interactive terminal every draw homes the cursor and clears the
//! screen first, so the display updates in place whatever else was written
//! to the terminal in between (log lines, wrapped rows). When output is
//! redirected each edit is appended instead.

use std::io::{self, IsTerminal, Stdout, Write};

use tracing::debug;

use super::errors::SinkError;
use super::traits::MessageSink;
use super::types::{Message, MessageHandle};

/// Moves the cursor to the top-left corner and clears the screen.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

pub struct TerminalSink<W: Write + Send> {
    writer: W,
    redraw: bool,
    sent: u64,
    /// Handle of the block currently on screen.
    current: Option<MessageHandle>,
}

impl TerminalSink<Stdout> {
    /// Sink on stdout, redrawing in place only when stdout is a terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let redraw = stdout.is_terminal();
        Self::new(stdout, redraw)
    }
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(writer: W, redraw: bool) -> Self {
        Self {
            writer,
            redraw,
            sent: 0,
            current: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_block(&mut self, prefix: &str, block: &str) -> Result<(), SinkError> {
        let unavailable = |e: io::Error| SinkError::Unavailable {
            message: e.to_string(),
        };
        self.writer
            .write_all(prefix.as_bytes())
            .map_err(unavailable)?;
        self.writer.write_all(block.as_bytes()).map_err(unavailable)?;
        self.writer.flush().map_err(unavailable)
    }
}

impl<W: Write + Send> MessageSink for TerminalSink<W> {
    async fn send(&mut self, message: &Message) -> Result<MessageHandle, SinkError> {
        let prefix = if self.redraw { CLEAR_SCREEN } else { "" };
        self.write_block(prefix, &message.to_text_block())?;

        self.sent += 1;
        let handle = MessageHandle::new(format!("terminal-{}", self.sent));
        self.current = Some(handle.clone());

        debug!(event = "core.sink.terminal_sent", handle = %handle);
        Ok(handle)
    }

    async fn edit(&mut self, handle: &MessageHandle, message: &Message) -> Result<(), SinkError> {
        if self.current.as_ref() != Some(handle) {
            return Err(SinkError::NotEditable {
                handle: handle.id.clone(),
            });
        }

        let prefix = if self.redraw { CLEAR_SCREEN } else { "\n" };
        self.write_block(prefix, &message.to_text_block())
    }
}
