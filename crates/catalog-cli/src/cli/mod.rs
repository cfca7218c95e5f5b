//! Command-line interface definition for Catalog.
//!
//! Defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `catalog start [SOURCE_DIR]` - Start the catalog development server

mod commands;

use clap::Parser;

pub use commands::{Command, StartArgs, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOURCE_DIR};

/// Catalog - living style guide development server
#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    version,
    about = "Develop a component catalog next to your app",
    long_about = "Catalog serves a living style guide from a directory of catalog sources.\n\
                  It detects Create React App and next.js projects, honours the project's\n\
                  .babelrc and an optional catalog.config.toml, and opens the catalog in\n\
                  your browser."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
