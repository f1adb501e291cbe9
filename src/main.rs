//! dps - main entry point.
//!
//! Usage: dps [OPTIONS]
//!
//! Runs `docker ps`, keeps the containers matching `--find` and prints the
//! selected columns as a table. See `dps --help` for the column switches.

use std::process::ExitCode;

use clap::Parser;

use docker_ps_cli::Cli;
use docker_ps_cli::app;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
