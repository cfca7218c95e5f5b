//! Assembly stage: produce the final bundler configuration.

use super::options::RuntimeConfig;
use super::runtime::StartupRuntime;
use crate::bundler::{BundlerConfig, BundlerOptions};
use crate::error::Result;

/// The options bag handed to the bundler configuration builder.
pub fn bundler_options(config: &RuntimeConfig) -> BundlerOptions {
    BundlerOptions {
        paths: config.paths.clone(),
        dev: true,
        framework: config.framework,
        url: config.url.clone(),
        use_babelrc: config.use_babelrc,
    }
}

/// Build the base configuration and apply the config file's override, if any.
///
/// The override's result is used as-is.
pub async fn assemble<R>(runtime: &R, config: &RuntimeConfig) -> Result<BundlerConfig>
where
    R: StartupRuntime + ?Sized,
{
    let options = bundler_options(config);
    let base = runtime.build_bundler_config(&options).await?;

    let transform = config
        .config_file
        .as_ref()
        .and_then(|file| file.webpack.as_ref().map(|transform| (file, transform)));

    match transform {
        Some((file, transform)) => {
            tracing::debug!(source = %file.path.display(), "applying bundler override");
            Ok(transform(base, &options)?)
        }
        None => Ok(base),
    }
}
