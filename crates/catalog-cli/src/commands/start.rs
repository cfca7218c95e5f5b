//! `catalog start` command implementation.
//!
//! Runs the startup sequence against the native runtime, reports where the
//! catalog is served and keeps serving until Ctrl+C.

use std::time::Instant;

use crate::cli::StartArgs;
use crate::error::Result;
use crate::start::{self, NativeRuntime, StartupOptions};
use crate::ui;

/// Execute the start command.
///
/// # Process Flow
///
/// 1. Resolve framework, config file, paths, port and babelrc usage
/// 2. Assemble the bundler configuration
/// 3. Scaffold the catalog, start the dev server and open a browser
/// 4. Serve until Ctrl+C or SIGTERM, then shut down gracefully
///
/// # Errors
///
/// Any failure before the server is listening is returned unchanged, as is
/// a server task that dies while serving.
pub async fn execute(args: StartArgs) -> Result<()> {
    let started = Instant::now();
    let options = StartupOptions::from(args);
    let runtime = NativeRuntime::new()?;

    tracing::debug!(root = %runtime.root().display(), ?options, "starting catalog");

    let server = start::run(&runtime, options).await?;
    ui::print_server_ready(server.url(), started.elapsed());
    ui::info("Press Ctrl+C to stop");

    server.serve_until_signal().await?;
    ui::success("Catalog stopped");
    Ok(())
}
