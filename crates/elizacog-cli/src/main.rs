//! ElizaCog command-line entry point.
//!
//! Binary name: `elizacog`
//!
//! Parses CLI arguments, sets up logging, then dispatches to the command
//! handler. Handlers return the process exit status; unexpected errors are
//! printed and mapped to a failure status.

mod cli;
mod state;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use console::style;

use cli::{Cli, Commands};
use elizacog_observe::tracing_setup::{filter_for_verbosity, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(filter_for_verbosity(cli.verbose, cli.quiet)) {
        eprintln!("warning: could not initialize logging: {e}");
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::FAILURE);
    };

    match command {
        Commands::Init => cli::init::init(&cli.directory, cli.json),
        Commands::Test => cli::test_cmd::test(&cli.directory, cli.json),
        Commands::Status => cli::status::status(&cli.directory, cli.json),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "elizacog", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
