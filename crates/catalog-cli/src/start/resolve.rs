//! Resolution stage: turn the startup options into a [`RuntimeConfig`].

use std::path::Path;

use super::options::{RuntimeConfig, StartupOptions};
use super::runtime::StartupRuntime;
use crate::config::ConfigFile;
use crate::error::{CliError, Result};

/// Build directory handed to the path resolver; empty means the default.
const BUILD_DIR: &str = "";

/// Public URL base of the served catalog.
const URL_BASE: &str = "/";

/// Resolve every runtime decision.
///
/// Framework detection (followed by path resolution), config file loading and
/// port allocation run concurrently. The first failure aborts the others and
/// is returned.
pub async fn resolve<R>(runtime: &R, options: &StartupOptions) -> Result<RuntimeConfig>
where
    R: StartupRuntime + ?Sized,
{
    let framework_and_paths = async {
        let framework = runtime.detect_framework().await?;
        let paths = runtime
            .load_paths(&options.source_dir, BUILD_DIR, framework, URL_BASE)
            .await?;
        Ok::<_, CliError>((framework, paths))
    };

    let ((framework, paths), config_file, port) = tokio::try_join!(
        framework_and_paths,
        runtime.load_config_file(),
        runtime.allocate_port(options.port)
    )?;

    let use_babelrc =
        resolve_babelrc(runtime, options.babelrc, config_file.as_ref(), &paths.babelrc).await?;
    let url = server_url(options.https, &options.host, port);

    tracing::debug!(%framework, port, %url, use_babelrc, "resolved runtime configuration");

    Ok(RuntimeConfig {
        paths,
        framework,
        https: options.https,
        host: options.host.clone(),
        port,
        url,
        use_babelrc,
        config_file,
        proxy: options.proxy.clone(),
    })
}

/// Decide whether the project's `.babelrc` is used.
///
/// The command-line flag wins, then the config file's `useBabelrc`, then the
/// presence of the file. The filesystem is only probed when neither of the
/// first two is set.
pub async fn resolve_babelrc<R>(
    runtime: &R,
    cli: Option<bool>,
    config_file: Option<&ConfigFile>,
    babelrc: &Path,
) -> Result<bool>
where
    R: StartupRuntime + ?Sized,
{
    if let Some(value) = cli {
        return Ok(value);
    }
    if let Some(value) = config_file.and_then(|file| file.use_babelrc) {
        return Ok(value);
    }
    runtime.path_exists(babelrc).await
}

/// URL the catalog is served at: `{http|https}://{host}:{port}/`.
///
/// The host is used verbatim.
///
/// ```
/// use catalog_cli::start::server_url;
///
/// assert_eq!(server_url(false, "localhost", 4000), "http://localhost:4000/");
/// assert_eq!(server_url(true, "localhost", 4000), "https://localhost:4000/");
/// ```
pub fn server_url(https: bool, host: &str, port: u16) -> String {
    let scheme = if https { "https" } else { "http" };
    format!("{scheme}://{host}:{port}/")
}
