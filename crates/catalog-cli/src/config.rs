//! The loaded configuration file as the startup sequence sees it.
//!
//! `catalog-config` parses the file; this module turns its `webpack` table into
//! a [`BundlerOverride`], a transform applied to the generated bundler
//! configuration.

use catalog_config::{merge_values, ConfigDiscovery, DiscoveredConfig};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::bundler::{BundlerConfig, BundlerOptions};
use crate::error::{BundlerError, ConfigError};

/// A user-supplied transform of the generated bundler configuration.
pub type BundlerOverride = Arc<
    dyn Fn(BundlerConfig, &BundlerOptions) -> Result<BundlerConfig, BundlerError> + Send + Sync,
>;

/// An optional configuration file, every field optional.
#[derive(Clone)]
pub struct ConfigFile {
    /// File the configuration came from
    pub path: PathBuf,
    /// Use the project's `.babelrc`
    pub use_babelrc: Option<bool>,
    /// Transform applied to the generated bundler configuration
    pub webpack: Option<BundlerOverride>,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_babelrc: None,
            webpack: None,
        }
    }

    #[must_use]
    pub fn with_use_babelrc(mut self, use_babelrc: bool) -> Self {
        self.use_babelrc = Some(use_babelrc);
        self
    }

    #[must_use]
    pub fn with_override<F>(mut self, transform: F) -> Self
    where
        F: Fn(BundlerConfig, &BundlerOptions) -> Result<BundlerConfig, BundlerError>
            + Send
            + Sync
            + 'static,
    {
        self.webpack = Some(Arc::new(transform));
        self
    }

    /// File name for status output, e.g. `catalog.config.toml`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("path", &self.path)
            .field("use_babelrc", &self.use_babelrc)
            .field("webpack", &self.webpack.as_ref().map(|_| "<override>"))
            .finish()
    }
}

impl From<DiscoveredConfig> for ConfigFile {
    fn from(found: DiscoveredConfig) -> Self {
        let source_name = found.file_name();
        Self {
            webpack: found
                .config
                .webpack
                .map(|patch| merge_override(patch, source_name)),
            use_babelrc: found.config.use_babelrc,
            path: found.path,
        }
    }
}

/// An override that deep-merges `patch` over the generated configuration.
///
/// Objects merge key by key, everything else replaces. The merged result must
/// still deserialize as a [`BundlerConfig`].
pub fn merge_override(patch: Value, source_name: String) -> BundlerOverride {
    Arc::new(move |config: BundlerConfig, _options: &BundlerOptions| -> Result<BundlerConfig, BundlerError> {
        let to_error = |e: serde_json::Error| BundlerError::Override {
            source_name: source_name.clone(),
            message: e.to_string(),
        };

        let mut value = serde_json::to_value(&config).map_err(to_error)?;
        merge_values(&mut value, &patch);
        serde_json::from_value(value).map_err(to_error)
    })
}

/// Load the configuration file of the project at `root`, if there is one.
///
/// # Errors
///
/// Returns [`ConfigError`] when a file exists but is malformed.
pub fn load_config_file(root: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    Ok(ConfigDiscovery::new(root).load()?.map(ConfigFile::from))
}
