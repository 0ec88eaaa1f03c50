use tracing::error;

use panelwatch_core::config::PanelConfig;
use panelwatch_core::events;

/// Load and validate configuration, telling the user where to fix it on
/// failure. Unlike optional settings, the panel URL and API key have no
/// usable default, so a failed load stops the command.
pub(crate) fn load_config() -> Result<PanelConfig, Box<dyn std::error::Error>> {
    match PanelConfig::load_hierarchy() {
        Ok(config) => {
            events::log_config_loaded(&config);
            Ok(config)
        }
        Err(e) => {
            eprintln!(
                "❌ Could not load configuration: {}\n\
                 Tip: Check ~/.panelwatch/config.toml, ./.panelwatch/config.toml and the PANEL_URL / API_KEY environment variables.",
                e
            );
            error!(event = "cli.config.load_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Single-threaded runtime for one command invocation.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}
