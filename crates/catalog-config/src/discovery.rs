//! File-based config discovery.
//!
//! Finds and loads the Catalog configuration file for a project root. A
//! missing file is not an error: the configuration is optional.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Format, Json, Toml};
use figment::Figment;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::{ConfigError, Result};

/// Dedicated configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["catalog.config.toml", "catalog.config.json"];

/// Field of `package.json` that may hold the configuration instead.
const PACKAGE_JSON_FIELD: &str = "catalog";

/// A configuration file that was found and parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredConfig {
    /// File the configuration was read from
    pub path: PathBuf,
    /// Parsed contents
    pub config: CatalogConfig,
}

impl DiscoveredConfig {
    /// File name for display, e.g. `catalog.config.toml`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use catalog_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// if let Some(found) = discovery.load().unwrap() {
///     println!("using {}", found.path.display());
/// }
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. `catalog.config.toml`
    /// 2. `catalog.config.json`
    /// 3. `package.json` with a non-null `catalog` field
    pub fn find(&self) -> Option<PathBuf> {
        for name in CONFIG_FILE_NAMES {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the configuration, if the project has one.
    ///
    /// # Errors
    ///
    /// Returns an error when a file exists but cannot be parsed or fails
    /// validation.
    pub fn load(&self) -> Result<Option<DiscoveredConfig>> {
        let Some(path) = self.find() else {
            tracing::debug!(root = %self.root.display(), "no catalog config file found");
            return Ok(None);
        };

        let config = load_from(&path)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded catalog config file");

        Ok(Some(DiscoveredConfig { path, config }))
    }
}

/// Load config from a specific file path.
fn load_from(path: &Path) -> Result<CatalogConfig> {
    let figment = match path.file_name().and_then(|name| name.to_str()) {
        Some("package.json") => Figment::from(Json::file(path)).focus(PACKAGE_JSON_FIELD),
        _ => match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        },
    };

    figment.extract().map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discover and load config from the current directory.
pub fn discover() -> Result<Option<DiscoveredConfig>> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}
