use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("panelwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live node and server status for a game panel")
        .long_about("panelwatch polls a Pterodactyl-style panel for node health and server resource limits, then keeps a single status message up to date for a fixed window. The message is drawn in the terminal, or posted to a chat webhook when one is configured.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Show a live status message, refreshed until the window elapses (Ctrl-C stops early)")
        )
        .subcommand(
            Command::new("snapshot")
                .about("Fetch the status once and print it")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
