//! Configuration type definitions for panelwatch.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [panel]
//! url = "https://panel.example.com"
//! api_key = "ptla_xxxxxxxx"
//!
//! [session]
//! window_secs = 300
//! refresh_interval_secs = 5
//!
//! [display]
//! title = "Status"
//!
//! [sink]
//! webhook_url = "https://discord.com/api/webhooks/123/abc"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration loaded from TOML config files and the environment.
///
/// Loaded from, in increasing priority:
/// 1. User config: `~/.panelwatch/config.toml`
/// 2. Project config: `./.panelwatch/config.toml`
/// 3. Environment: `PANEL_URL`, `API_KEY`, `PANELWATCH_WEBHOOK_URL`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    /// Panel connection settings
    #[serde(default)]
    pub panel: PanelSettings,

    /// Poll session timing
    #[serde(default)]
    pub session: SessionConfig,

    /// Status view appearance
    #[serde(default)]
    pub display: DisplayConfig,

    /// Where the status message is delivered
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Panel connection settings.
///
/// `url` and `api_key` are the two opaque values the rest of the system
/// needs; everything else has a default.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct PanelSettings {
    /// Base URL of the panel, e.g. `https://panel.example.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Application API key sent as a bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

// Hand-written so the API key never ends up in logs or panic messages.
impl std::fmt::Debug for PanelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelSettings")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Poll session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Length of the observation window in seconds.
    /// Default: 300 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_secs: Option<u64>,

    /// Delay between cycles in seconds.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,

    /// Maximum number of server detail lookups in flight at once.
    /// Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_concurrency: Option<usize>,

    /// Consecutive sink failures tolerated before the session gives up.
    /// Default: 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sink_failures: Option<u32>,
}

/// Status view appearance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Title of the status view.
    /// Default: "Status".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Accent color as a 24-bit RGB integer (used by chat embeds).
    /// Default: 0x0099ff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

/// Message sink selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SinkConfig {
    /// Chat webhook URL. When unset the status is drawn on the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl PanelSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(super::defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

impl SessionConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(
            self.window_secs
                .unwrap_or(super::defaults::DEFAULT_WINDOW_SECS),
        )
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(
            self.refresh_interval_secs
                .unwrap_or(super::defaults::DEFAULT_REFRESH_INTERVAL_SECS),
        )
    }

    pub fn max_sink_failures(&self) -> u32 {
        self.max_sink_failures
            .unwrap_or(super::defaults::DEFAULT_MAX_SINK_FAILURES)
    }
}

impl DisplayConfig {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_TITLE)
    }

    pub fn color(&self) -> u32 {
        self.color.unwrap_or(super::defaults::DEFAULT_COLOR)
    }
}
