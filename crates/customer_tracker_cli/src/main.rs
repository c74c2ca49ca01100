//! Interactive HVAC customer tracker.
//!
//! # Responsibility
//! - Wire logging, configuration and the core service into a menu session.
//! - Keep prompt I/O out of `customer_tracker_core`.

mod menu;

use customer_tracker_core::{default_log_level, init_logging, open_service, TrackerConfig};
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("Unable to determine working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(default_log_level(), &cwd.join("logs")) {
        eprintln!("Logging disabled: {err}");
    }

    let config = TrackerConfig::in_dir(&cwd);
    let service = open_service(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = menu::Session::new(&service, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end module=cli status=error error={}", err);
            eprintln!("Terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
