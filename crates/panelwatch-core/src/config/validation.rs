//! Configuration validation.

use crate::config::types::PanelConfig;
use crate::errors::ConfigError;

/// Validate a fully merged configuration.
///
/// The panel URL and API key are required; numeric knobs must be non-zero
/// when set.
pub fn validate_config(config: &PanelConfig) -> Result<(), ConfigError> {
    let url = config
        .panel
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(ConfigError::MissingPanelUrl)?;

    if !is_http_url(url) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("panel url '{}' must start with http:// or https://", url),
        });
    }

    if config
        .panel
        .api_key
        .as_deref()
        .is_none_or(|k| k.trim().is_empty())
    {
        return Err(ConfigError::MissingApiKey);
    }

    if let Some(webhook) = config.sink.webhook_url.as_deref()
        && !is_http_url(webhook)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "sink webhook_url must start with http:// or https://".to_string(),
        });
    }

    let session = &config.session;
    for (name, value) in [
        ("session.window_secs", session.window_secs),
        ("session.refresh_interval_secs", session.refresh_interval_secs),
        ("panel.request_timeout_secs", config.panel.request_timeout_secs),
    ] {
        if value == Some(0) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be greater than 0", name),
            });
        }
    }

    if session.detail_concurrency == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "session.detail_concurrency must be greater than 0".to_string(),
        });
    }

    if session.max_sink_failures == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "session.max_sink_failures must be greater than 0".to_string(),
        });
    }

    Ok(())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
