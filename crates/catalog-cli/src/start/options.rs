use crate::config::ConfigFile;
use crate::framework::FrameworkKind;
use crate::paths::ResolvedPaths;

/// Inputs to a catalog start, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOptions {
    /// Catalog source directory, relative to the project root
    pub source_dir: String,
    /// Preferred port; the allocator may pick another
    pub port: u16,
    pub https: bool,
    pub host: String,
    /// Target for requests the catalog cannot answer
    pub proxy: Option<String>,
    /// `Some` when `--babelrc` was given on the command line
    pub babelrc: Option<bool>,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            source_dir: crate::cli::DEFAULT_SOURCE_DIR.to_string(),
            port: crate::cli::DEFAULT_PORT,
            https: false,
            host: crate::cli::DEFAULT_HOST.to_string(),
            proxy: None,
            babelrc: None,
        }
    }
}

/// The fully resolved runtime configuration.
///
/// Every decision is made before the bundler configuration is assembled.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub paths: ResolvedPaths,
    pub framework: FrameworkKind,
    pub https: bool,
    pub host: String,
    /// Port returned by the allocator
    pub port: u16,
    /// `{scheme}://{host}:{port}/`
    pub url: String,
    pub use_babelrc: bool,
    pub config_file: Option<ConfigFile>,
    pub proxy: Option<String>,
}
