//! Application-level lifecycle events shared by every command.

use tracing::{error, info};

use crate::config::PanelConfig;
use crate::errors::PanelwatchError;

pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

/// Log the resolved configuration. The API key is never logged.
pub fn log_config_loaded(config: &PanelConfig) {
    info!(
        event = "core.app.config_loaded",
        panel_url = config.panel.url.as_deref().unwrap_or(""),
        api_key_set = config.panel.api_key.is_some(),
        window_secs = config.session.window().as_secs(),
        refresh_interval_secs = config.session.refresh_interval().as_secs(),
        webhook = config.sink.webhook_url.is_some()
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error<E: PanelwatchError>(error: &E) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}
