//! Miette diagnostic conversion for CLI errors.
//!
//! Messages built by the error types carry their hints inline after a
//! `Hint:` marker; here the hint is split off into the diagnostic's help text.

use crate::error::CliError;
use ::miette::Report;

const HINT_MARKER: &str = "\n\nHint: ";

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    let message = err.to_string();
    match message.split_once(HINT_MARKER) {
        Some((body, hint)) => ::miette::miette!(help = hint.to_string(), "{}", body),
        None => ::miette::miette!("{}", message),
    }
}
