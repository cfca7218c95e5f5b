//! Opening the catalog in the user's browser.

use std::io;
use std::process::{Command, Stdio};

/// Environment variable selecting the browser; `none` disables opening.
pub const BROWSER_ENV: &str = "BROWSER";

/// Open `url` in the default browser.
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Windows: `start`
/// - Linux: `xdg-open`
///
/// The command is spawned and not waited on.
pub fn open_browser(url: &str) -> io::Result<()> {
    if browser_disabled() {
        tracing::debug!("{BROWSER_ENV}=none, not opening a browser");
        return Ok(());
    }
    if crate::ui::is_ci() {
        tracing::debug!("running in CI, not opening a browser");
        return Ok(());
    }

    let mut command = if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", url]);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    tracing::debug!(%url, "opened browser");
    Ok(())
}

fn browser_disabled() -> bool {
    std::env::var(BROWSER_ENV).is_ok_and(|value| value.eq_ignore_ascii_case("none"))
}
