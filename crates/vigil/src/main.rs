use vigil_core::{init_logging, logging};

mod app;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Extract verbose flag before initializing logging
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    // Failures are reported but never change the exit code: the process is
    // typically left unattended for hours and wrappers treat any exit as
    // "routine over".
    if let Err(e) = commands::run_command(&matches) {
        logging::log_failure(e.as_ref());
        eprintln!("Error: {}", e);
    }
}
