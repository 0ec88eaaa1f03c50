use clap::ArgMatches;
use tracing::error;

use panelwatch_core::events;

mod helpers;
mod snapshot;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let result = match matches.subcommand() {
        Some(("watch", sub_matches)) => {
            events::log_app_startup("watch");
            watch::handle_watch_command(sub_matches)
        }
        Some(("snapshot", sub_matches)) => {
            events::log_app_startup("snapshot");
            snapshot::handle_snapshot_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command.unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
