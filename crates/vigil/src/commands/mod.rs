use clap::ArgMatches;
use tracing::error;

use vigil_core::logging;

pub mod helpers;

mod browsers;
mod completions;
mod deadline;
mod run;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    logging::log_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("deadline", sub_matches)) => deadline::handle_deadline_command(sub_matches),
        Some(("browsers", sub_matches)) => browsers::handle_browsers_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
