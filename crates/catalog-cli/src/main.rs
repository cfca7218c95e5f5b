//! Catalog CLI - component catalog development server.
//!
//! This is the main entry point for the `catalog` binary. It handles
//! command-line argument parsing, logging initialization, and command dispatch.

use catalog_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Start(start_args) => commands::start_execute(start_args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error("Could not start Catalog");
            eprintln!("{:?}", error::cli_error_to_miette(err));
            ExitCode::FAILURE
        }
    }
}
