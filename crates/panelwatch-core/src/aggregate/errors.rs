use crate::errors::PanelwatchError;

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("No server details to aggregate: the panel reported zero servers")]
    EmptyServerSet,
}

impl PanelwatchError for AggregateError {
    fn error_code(&self) -> &'static str {
        match self {
            AggregateError::EmptyServerSet => "AGGREGATE_EMPTY_SERVER_SET",
        }
    }
}
