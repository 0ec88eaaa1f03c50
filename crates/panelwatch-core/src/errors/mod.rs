use std::error::Error;

/// Base trait for all application errors
pub trait PanelwatchError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error(
        "Panel URL is not configured. Set PANEL_URL or [panel] url in ~/.panelwatch/config.toml"
    )]
    MissingPanelUrl,

    #[error(
        "Panel API key is not configured. Set API_KEY or [panel] api_key in ~/.panelwatch/config.toml"
    )]
    MissingApiKey,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl PanelwatchError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingPanelUrl => "CONFIG_MISSING_PANEL_URL",
            ConfigError::MissingApiKey => "CONFIG_MISSING_API_KEY",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::IoError { .. })
    }
}
