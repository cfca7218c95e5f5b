//! Logging infrastructure for the Catalog CLI.
//!
//! Structured logging built on the `tracing` ecosystem. Status lines meant for
//! the user go through [`crate::ui`]; tracing carries the diagnostic detail of
//! each startup step and is quiet by default.
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting catalog");
//! debug!(port = 4000, "allocated port");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "catalog=debug,catalog_cli=debug,catalog_config=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "catalog=error,catalog_cli=error,catalog_config=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "catalog=warn,catalog_cli=warn,catalog_config=warn";

/// Pick the filter directive for the given flags.
///
/// `verbose` wins over `quiet`; `RUST_LOG` is consulted only when neither is
/// set.
pub fn filter_directive(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Initialize the tracing subscriber with the specified options.
///
/// Should be called once at the start of the program, before any logging
/// occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match filter_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
