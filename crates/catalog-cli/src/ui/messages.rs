//! Status message functions for terminal output.
//!
//! All messages go to stderr so stdout stays free for anything piped. Only
//! errors survive quiet mode.

use console::style;

use super::is_quiet;

/// Print a success message.
///
/// ```no_run
/// catalog_cli::ui::success("Catalog is running");
/// ```
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
///
/// ```no_run
/// catalog_cli::ui::info("Press Ctrl+C to stop");
/// ```
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", style("ℹ").blue().bold(), message);
}

/// Print an error message.
///
/// `message` may span several lines; continuation lines are indented under
/// the marker.
pub fn error(message: &str) {
    let mut lines = message.lines();
    if let Some(first) = lines.next() {
        eprintln!("{} {}", style("✗").red().bold(), style(first).red());
    }
    for line in lines {
        eprintln!("  {}", style(line).red());
    }
}
