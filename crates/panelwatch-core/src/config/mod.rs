//! # Configuration System
//!
//! Hierarchical TOML configuration for panelwatch.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.panelwatch/config.toml` (global user preferences)
//! 3. **Project config** - `./.panelwatch/config.toml` (directory-specific overrides)
//! 4. **Environment** - `PANEL_URL`, `API_KEY`, `PANELWATCH_WEBHOOK_URL`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use panelwatch_core::config::PanelConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PanelConfig::load_hierarchy()?;
//!     println!("polling {}", config.base_url()?);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use crate::errors::ConfigError;

// Public API exports
pub use types::{DisplayConfig, PanelConfig, PanelSettings, SessionConfig, SinkConfig};
pub use validation::validate_config;

impl PanelConfig {
    /// Load configuration from the hierarchy of config files and the environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Panel base URL without a trailing slash.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        self.panel
            .url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingPanelUrl)
    }

    /// Panel application API key.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.panel
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}
