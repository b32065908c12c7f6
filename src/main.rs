//! Chores CLI - recurring household chores in a markdown log

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = chores_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
