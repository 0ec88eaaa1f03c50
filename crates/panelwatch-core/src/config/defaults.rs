//! Default values for configuration types.
//!
//! Accessor methods on the config types fall back to these when a field is
//! not set in any config source.

/// Observation window: five minutes of live updates per session.
pub const DEFAULT_WINDOW_SECS: u64 = 300;

/// Delay between poll cycles.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Per-request timeout for panel API calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Consecutive sink failures tolerated before the session ends early.
pub const DEFAULT_MAX_SINK_FAILURES: u32 = 3;

/// Default status view title.
pub const DEFAULT_TITLE: &str = "Status";

/// Default accent color (0x0099ff).
pub const DEFAULT_COLOR: u32 = 0x0099ff;

/// Environment variable holding the panel base URL.
pub const ENV_PANEL_URL: &str = "PANEL_URL";

/// Environment variable holding the panel application API key.
pub const ENV_API_KEY: &str = "API_KEY";

/// Environment variable holding the chat webhook URL.
pub const ENV_WEBHOOK_URL: &str = "PANELWATCH_WEBHOOK_URL";

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR_NAME: &str = ".panelwatch";
