//! staff-report entrypoint.
//!
//! Parses arguments and hands over to `cli::run`. Configuration errors end
//! the run with exit status 2 before any input is read.

use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
