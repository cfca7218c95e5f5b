//! Launch stage: scaffold, report, serve, open.

use super::options::RuntimeConfig;
use super::runtime::StartupRuntime;
use crate::bundler::BundlerConfig;
use crate::dev::LaunchRequest;
use crate::error::Result;
use crate::ui;

/// First line of the startup summary.
pub const BANNER: &str = "Starting Catalog …";

/// Status lines describing the resolved configuration, in display order.
pub fn summary_lines(config: &RuntimeConfig) -> Vec<String> {
    let mut lines = vec![BANNER.to_string()];

    if let Some(file) = &config.config_file {
        lines.push(format!("Using configuration file {}", file.file_name()));
    }
    if config.framework.is_known() {
        lines.push(format!("Detected {}", config.framework.display_name()));
    }
    if config.use_babelrc {
        lines.push("Using custom .babelrc".to_string());
    }

    lines
}

/// Prepare the catalog, start the server and open a browser.
///
/// A failing browser is logged and otherwise ignored.
pub async fn launch<R>(
    runtime: &R,
    config: RuntimeConfig,
    bundler_config: BundlerConfig,
) -> Result<R::Server>
where
    R: StartupRuntime + ?Sized,
{
    runtime.setup_catalog(&config.paths).await?;

    ui::print_startup_summary(&summary_lines(&config));

    let url = config.url;
    let server = runtime
        .launch_dev_server(LaunchRequest {
            config: bundler_config,
            host: config.host,
            port: config.port,
            https: config.https,
            paths: config.paths,
            framework: config.framework,
            proxy: config.proxy,
        })
        .await?;

    if let Err(e) = runtime.open_browser(&url).await {
        tracing::warn!(error = %e, %url, "could not open browser");
    }

    Ok(server)
}
