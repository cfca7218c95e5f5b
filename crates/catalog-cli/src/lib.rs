//! Catalog CLI - start a component catalog next to your app.
//!
//! This crate provides the `catalog` command and the library behind it. The
//! heart of it is the startup sequence in [`start`], which turns command-line
//! flags, an optional configuration file and what it finds on disk into a
//! running dev server.
//!
//! # Architecture
//!
//! - [`start`] - Startup orchestration and the [`start::StartupRuntime`] seam
//! - [`framework`], [`paths`], [`port`], [`config`] - Resolution collaborators
//! - [`bundler`] - Bundler configuration builder
//! - [`setup`], [`dev`], [`browser`] - Launch collaborators
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal output
//! - `cli`, `commands` - Argument parsing and command dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_cli::start::{run, NativeRuntime, StartupOptions};
//!
//! # async fn example() -> catalog_cli::Result<()> {
//! catalog_cli::logger::init_logger(false, false, false);
//!
//! let runtime = NativeRuntime::new()?;
//! let server = run(&runtime, StartupOptions::default()).await?;
//! server.serve_until_signal().await?;
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod bundler;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dev;
pub mod error;
pub mod framework;
pub mod logger;
pub mod paths;
pub mod port;
pub mod setup;
pub mod start;
pub mod ui;

// Re-export commonly used types
pub use error::{BundlerError, CliError, ConfigError, LaunchError, ResolveError, Result};
