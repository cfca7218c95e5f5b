//! Terminal UI utilities for status lines and the startup summary.
//!
//! Handles environment detection (CI, TTY, `NO_COLOR`) and degrades to plain
//! text when terminal features aren't available. In quiet mode only errors
//! are printed.
//!
//! # Examples
//!
//! ```no_run
//! use catalog_cli::ui;
//!
//! ui::init_colors(false);
//! ui::set_quiet(false);
//!
//! ui::print_startup_summary(&["Starting Catalog …".to_string()]);
//! ui::info("Press Ctrl+C to stop");
//! ```

mod format;
mod messages;

pub use format::{format_duration, print_server_ready, print_startup_summary};
pub use messages::{error, info, success};

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence everything but errors (`--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether status output is suppressed.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` enables them even without a
/// terminal; otherwise colors follow whether stderr is attended.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Applies the result of [`should_use_color`] (and `--no-color`) to every
/// styled message printed through this module.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}
