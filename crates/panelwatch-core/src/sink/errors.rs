use crate::errors::PanelwatchError;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Message '{handle}' can no longer be edited")]
    NotEditable { handle: String },

    #[error("Sink temporarily unavailable: {message}")]
    Unavailable { message: String },

    #[error("Sink rejected the request: {message}")]
    Rejected { message: String },

    #[error("Could not set up sink: {message}")]
    Setup { message: String },
}

impl SinkError {
    /// Whether retrying on a later cycle is pointless.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SinkError::Rejected { .. } | SinkError::Setup { .. })
    }
}

impl PanelwatchError for SinkError {
    fn error_code(&self) -> &'static str {
        match self {
            SinkError::NotEditable { .. } => "SINK_NOT_EDITABLE",
            SinkError::Unavailable { .. } => "SINK_UNAVAILABLE",
            SinkError::Rejected { .. } => "SINK_REJECTED",
            SinkError::Setup { .. } => "SINK_SETUP_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        self.is_fatal()
    }
}
