//! Formatting utilities for durations and the startup summary.

use console::{style, Term};
use std::time::Duration;

use super::is_quiet;

/// Startup time as shown in the ready line: `850ms`, `1.50s` or `1m 30s`.
///
/// ```
/// use std::time::Duration;
/// use catalog_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    match duration.as_millis() {
        ms @ 0..1_000 => format!("{ms}ms"),
        1_000..60_000 => format!("{:.2}s", duration.as_secs_f64()),
        _ => {
            let secs = duration.as_secs();
            format!("{}m {}s", secs / 60, secs % 60)
        }
    }
}

/// Print the startup summary to stderr.
///
/// The first line is the banner and is set apart by blank lines; the rest are
/// printed dimmed and indented. Nothing is printed in quiet mode.
///
/// # Examples
///
/// ```no_run
/// use catalog_cli::ui::print_startup_summary;
///
/// print_startup_summary(&[
///     "Starting Catalog …".to_string(),
///     "Detected Create React App".to_string(),
/// ]);
/// ```
pub fn print_startup_summary(lines: &[String]) {
    if is_quiet() {
        return;
    }
    let Some((banner, details)) = lines.split_first() else {
        return;
    };

    eprintln!("\n  {}\n", style(banner).bold());
    for line in details {
        eprintln!("  {}", style(line).dim());
    }
}

/// Print the final "server is up" line to stderr.
///
/// Displays the URL underlined between two rules sized to the terminal.
pub fn print_server_ready(url: &str, elapsed: Duration) {
    if is_quiet() {
        return;
    }
    let term = Term::stderr();
    let width = (term.size().1 as usize).min(60);

    eprintln!("{}", style("─".repeat(width)).dim());
    eprintln!(
        "  {} {} {}",
        style("▸").blue(),
        style(url).white().bright().bold().underlined(),
        style(format!("(ready in {})", format_duration(elapsed))).dim()
    );
    eprintln!("{}", style("─".repeat(width)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::ZERO), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_print_startup_summary() {
        print_startup_summary(&[
            "Starting Catalog …".to_string(),
            "Using custom .babelrc".to_string(),
        ]);
    }

    #[test]
    fn test_print_startup_summary_empty() {
        print_startup_summary(&[]);
    }

    #[test]
    fn test_print_server_ready() {
        print_server_ready("http://localhost:4000/", Duration::from_millis(120));
    }
}
