use clap::ArgMatches;
use tracing::{error, info};

use panelwatch_core::events;
use panelwatch_core::session_ops;
use panelwatch_core::{HttpInventoryClient, SessionOptions};

use super::helpers::{build_runtime, load_config};

pub(crate) fn handle_snapshot_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.snapshot_started", json_output = json_output);

    let config = load_config()?;
    let inventory = HttpInventoryClient::from_config(&config)?;
    let options = SessionOptions::from_config(&config);

    let runtime = build_runtime()?;
    match runtime.block_on(session_ops::snapshot(&inventory, &options)) {
        Ok(view) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view);
            }

            info!(
                event = "cli.snapshot_completed",
                nodes = view.node_fields.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch panel status: {}", e);

            error!(
                event = "cli.snapshot_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
