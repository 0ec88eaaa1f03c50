//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.panelwatch/config.toml`
//! 3. **Project config** - `./.panelwatch/config.toml`
//! 4. **Environment** - `PANEL_URL`, `API_KEY`, `PANELWATCH_WEBHOOK_URL`

use crate::config::defaults::{CONFIG_DIR_NAME, ENV_API_KEY, ENV_PANEL_URL, ENV_WEBHOOK_URL};
use crate::config::types::{DisplayConfig, PanelConfig, PanelSettings, SessionConfig, SinkConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load configuration from config files and the process environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if the
/// merged configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PanelConfig, ConfigError> {
    let user_path = user_config_path();
    let project_path = std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join("config.toml");

    load_hierarchy_from(user_path.as_deref(), &project_path, |key| {
        std::env::var(key).ok()
    })
}

/// Load configuration from explicit file locations and an environment lookup.
///
/// Split out from [`load_hierarchy`] so tests can point at temp directories
/// and inject environment values.
pub fn load_hierarchy_from<F>(
    user_path: Option<&Path>,
    project_path: &Path,
    env: F,
) -> Result<PanelConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = PanelConfig::default();

    if let Some(path) = user_path
        && let Some(user_config) = load_optional_config_file(path)?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_optional_config_file(project_path)? {
        config = merge_configs(config, project_config);
    }

    let config = apply_env_overrides(config, env);

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating "file not found" as absent.
fn load_optional_config_file(path: &Path) -> Result<Option<PanelConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => {
            debug!(
                event = "core.config.file_loaded",
                file_path = %path.display()
            );
            Ok(Some(config))
        }
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub(crate) fn load_config_file(path: &Path) -> Result<PanelConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Every field is optional, so override values replace base values only if present.
pub fn merge_configs(base: PanelConfig, override_config: PanelConfig) -> PanelConfig {
    PanelConfig {
        panel: PanelSettings {
            url: override_config.panel.url.or(base.panel.url),
            api_key: override_config.panel.api_key.or(base.panel.api_key),
            request_timeout_secs: override_config
                .panel
                .request_timeout_secs
                .or(base.panel.request_timeout_secs),
        },
        session: SessionConfig {
            window_secs: override_config
                .session
                .window_secs
                .or(base.session.window_secs),
            refresh_interval_secs: override_config
                .session
                .refresh_interval_secs
                .or(base.session.refresh_interval_secs),
            detail_concurrency: override_config
                .session
                .detail_concurrency
                .or(base.session.detail_concurrency),
            max_sink_failures: override_config
                .session
                .max_sink_failures
                .or(base.session.max_sink_failures),
        },
        display: DisplayConfig {
            title: override_config.display.title.or(base.display.title),
            color: override_config.display.color.or(base.display.color),
        },
        sink: SinkConfig {
            webhook_url: override_config.sink.webhook_url.or(base.sink.webhook_url),
        },
    }
}

/// Apply environment overrides on top of file configuration.
///
/// Empty values are ignored so `API_KEY=` in a shell does not wipe a file value.
pub fn apply_env_overrides<F>(mut config: PanelConfig, env: F) -> PanelConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(ENV_PANEL_URL) {
        config.panel.url = Some(url);
    }
    if let Some(key) = non_empty(ENV_API_KEY) {
        config.panel.api_key = Some(key);
    }
    if let Some(webhook) = non_empty(ENV_WEBHOOK_URL) {
        config.sink.webhook_url = Some(webhook);
    }

    config
}

/// Path of the user-level config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_hierarchy_integration() {
        let temp_dir = tempfile::tempdir().unwrap();
        let user_path = temp_dir.path().join("user").join("config.toml");
        let project_path = temp_dir.path().join("project").join("config.toml");
        fs::create_dir_all(user_path.parent().unwrap()).unwrap();
        fs::create_dir_all(project_path.parent().unwrap()).unwrap();

        fs::write(
            &user_path,
            r#"
[panel]
url = "https://user.example.com"
api_key = "ptla_user"

[session]
window_secs = 120
"#,
        )
        .unwrap();

        fs::write(
            &project_path,
            r#"
[panel]
url = "https://project.example.com"

[session]
refresh_interval_secs = 2
"#,
        )
        .unwrap();

        let config = load_hierarchy_from(Some(&user_path), &project_path, env_from(&[])).unwrap();

        assert_eq!(
            config.panel.url.as_deref(),
            Some("https://project.example.com")
        ); // Overridden by project
        assert_eq!(config.panel.api_key.as_deref(), Some("ptla_user")); // From user
        assert_eq!(config.session.window_secs, Some(120)); // From user
        assert_eq!(config.session.refresh_interval_secs, Some(2)); // From project
    }

    #[test]
    fn test_env_overrides_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project_path = temp_dir.path().join("config.toml");
        fs::write(
            &project_path,
            r#"
[panel]
url = "https://file.example.com"
api_key = "ptla_file"
"#,
        )
        .unwrap();

        let config = load_hierarchy_from(
            None,
            &project_path,
            env_from(&[
                ("PANEL_URL", "https://env.example.com"),
                ("API_KEY", ""),
                ("PANELWATCH_WEBHOOK_URL", "https://hooks.example.com/1/abc"),
            ]),
        )
        .unwrap();

        assert_eq!(config.panel.url.as_deref(), Some("https://env.example.com"));
        assert_eq!(config.panel.api_key.as_deref(), Some("ptla_file"));
        assert_eq!(
            config.sink.webhook_url.as_deref(),
            Some("https://hooks.example.com/1/abc")
        );
    }

    #[test]
    fn test_missing_files_use_env_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = load_hierarchy_from(
            Some(&temp_dir.path().join("nope.toml")),
            &temp_dir.path().join("also-nope.toml"),
            env_from(&[("PANEL_URL", "http://localhost:8080"), ("API_KEY", "k")]),
        )
        .unwrap();

        assert_eq!(config.panel.url.as_deref(), Some("http://localhost:8080"));
        assert!(config.sink.webhook_url.is_none());
    }

    #[test]
    fn test_missing_credentials_fail_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_hierarchy_from(
            None,
            &temp_dir.path().join("config.toml"),
            env_from(&[("PANEL_URL", "http://localhost:8080")]),
        );
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project_path = temp_dir.path().join("config.toml");
        fs::write(&project_path, "invalid toml [[[").unwrap();

        let result = load_hierarchy_from(None, &project_path, env_from(&[]));
        match result {
            Err(ConfigError::ConfigParseError { message }) => {
                assert!(message.contains("config.toml"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_keeps_base_when_override_empty() {
        let base: PanelConfig = toml::from_str(
            r#"
[session]
detail_concurrency = 4
max_sink_failures = 5

[display]
title = "Cluster"
"#,
        )
        .unwrap();

        let merged = merge_configs(base, PanelConfig::default());
        assert_eq!(merged.session.detail_concurrency, Some(4));
        assert_eq!(merged.session.max_sink_failures(), 5);
        assert_eq!(merged.display.title(), "Cluster");
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty_config: PanelConfig = toml::from_str("").unwrap();
        assert!(empty_config.panel.url.is_none());
        assert_eq!(empty_config.session.window_secs, None);

        let invalid_result: Result<PanelConfig, _> = toml::from_str("invalid toml [[[");
        assert!(invalid_result.is_err());
    }
}
