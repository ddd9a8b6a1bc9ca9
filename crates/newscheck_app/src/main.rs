mod cli;
mod platform;

use std::process::ExitCode;

use clap::Parser;
use newscheck_logging::nc_error;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    platform::logging::initialize(cli.log, cli.level());

    match platform::run(cli) {
        Ok(code) => code,
        Err(err) => {
            nc_error!("newscheck failed: {:#}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
