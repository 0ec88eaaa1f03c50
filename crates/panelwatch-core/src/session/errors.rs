use crate::aggregate::errors::AggregateError;
use crate::errors::PanelwatchError;
use crate::inventory::errors::InventoryError;
use crate::sink::errors::SinkError;

/// Failure of a single cycle. Caught at the cycle boundary; the session
/// carries on to the next tick.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl CycleError {
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            CycleError::Inventory(e) => e.endpoint(),
            CycleError::Aggregate(_) => None,
        }
    }
}

impl PanelwatchError for CycleError {
    fn error_code(&self) -> &'static str {
        match self {
            CycleError::Inventory(e) => e.error_code(),
            CycleError::Aggregate(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CycleError::Inventory(e) => e.is_user_error(),
            CycleError::Aggregate(e) => e.is_user_error(),
        }
    }
}

/// A session that could not start.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Could not show the placeholder message: {source}")]
    PlaceholderFailed {
        #[source]
        source: SinkError,
    },
}

impl PanelwatchError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::PlaceholderFailed { .. } => "SESSION_PLACEHOLDER_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SessionError::PlaceholderFailed { source } => source.is_user_error(),
        }
    }
}
