use clap::ArgMatches;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use panelwatch_core::config::PanelConfig;
use panelwatch_core::events;
use panelwatch_core::session_ops;
use panelwatch_core::{
    EndReason, HttpInventoryClient, SessionOptions, SessionReport, TerminalSink, WebhookSink,
};

use super::helpers::{build_runtime, load_config};

pub(crate) fn handle_watch_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.watch.started");

    let config = load_config()?;
    let inventory = HttpInventoryClient::from_config(&config)?;
    let options = SessionOptions::from_config(&config);

    println!(
        "Watching {} for {}s, refreshing every {}s. Press Ctrl-C to stop.",
        inventory.base_url(),
        options.window.as_secs(),
        options.refresh_interval.as_secs()
    );

    let runtime = build_runtime()?;
    let report = runtime.block_on(watch(&config, &inventory, &options))?;

    println!(
        "Status updates stopped after {} cycle(s) ({} ok, {} failed): {}",
        report.cycles_completed, report.cycles_succeeded, report.cycles_failed, report.end_reason
    );

    info!(
        event = "cli.watch.completed",
        session_id = %report.session_id,
        reason = %report.end_reason,
        cycles = report.cycles_completed
    );

    if report.end_reason == EndReason::SinkFailed {
        eprintln!("❌ The status message could not be updated; see logs with -v for details.");
        error!(event = "cli.watch.sink_failed", session_id = %report.session_id);
        return Err("status sink failed".into());
    }

    Ok(())
}

async fn watch(
    config: &PanelConfig,
    inventory: &HttpInventoryClient,
    options: &SessionOptions,
) -> Result<SessionReport, Box<dyn std::error::Error>> {
    let cancel = CancellationToken::new();

    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!(event = "cli.watch.interrupted");
                signal_cancel.cancel();
            }
            Err(e) => warn!(event = "cli.watch.signal_handler_failed", error = %e),
        }
    });

    let result = match WebhookSink::from_config(config)? {
        Some(mut sink) => session_ops::run_session(inventory, &mut sink, options, &cancel).await,
        None => {
            let mut sink = TerminalSink::stdout();
            session_ops::run_session(inventory, &mut sink, options, &cancel).await
        }
    };

    result.map_err(|e| {
        eprintln!("❌ Could not start status updates: {}", e);
        events::log_app_error(&e);
        e.into()
    })
}
