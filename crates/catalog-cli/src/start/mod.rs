//! The catalog startup sequence.
//!
//! A start runs in three stages:
//!
//! 1. **Resolution** ([`resolve()`]) - framework, config file, paths, port and
//!    the babelrc decision become a [`RuntimeConfig`]
//! 2. **Assembly** ([`assemble()`]) - the bundler configuration is built and
//!    the config file's override applied
//! 3. **Launch** ([`launch()`]) - the catalog is scaffolded, the summary
//!    printed, the dev server started and the browser opened
//!
//! Any failure before the browser step aborts the start and is returned
//! unchanged.

mod assemble;
mod launch;
mod native;
mod options;
mod resolve;
mod runtime;


pub use assemble::{assemble, bundler_options};
pub use launch::{launch, summary_lines, BANNER};
pub use native::NativeRuntime;
pub use options::{RuntimeConfig, StartupOptions};
pub use resolve::{resolve, resolve_babelrc, server_url};
pub use runtime::StartupRuntime;

use crate::error::Result;

/// Start the catalog and return the running server.
///
/// # Example
///
/// ```no_run
/// use catalog_cli::start::{run, NativeRuntime, StartupOptions};
///
/// # async fn example() -> catalog_cli::Result<()> {
/// let runtime = NativeRuntime::new()?;
/// let server = run(&runtime, StartupOptions::default()).await?;
/// println!("serving at {}", server.url());
/// server.serve_until_signal().await?;
/// # Ok(())
/// # }
/// ```
pub async fn run<R>(runtime: &R, options: StartupOptions) -> Result<R::Server>
where
    R: StartupRuntime + ?Sized,
{
    let config = resolve(runtime, &options).await?;
    let bundler_config = assemble(runtime, &config).await?;
    launch(runtime, config, bundler_config).await
}
