//! Collaborator abstraction for the startup sequence.
//!
//! The orchestrator never touches the filesystem, the network or the browser
//! directly. Everything goes through [`StartupRuntime`]; [`super::NativeRuntime`]
//! is the real implementation and tests drive the sequence with doubles.

use async_trait::async_trait;
use std::path::Path;

use crate::bundler::{BundlerConfig, BundlerOptions};
use crate::config::ConfigFile;
use crate::dev::LaunchRequest;
use crate::error::Result;
use crate::framework::FrameworkKind;
use crate::paths::ResolvedPaths;

/// The collaborators a catalog start is built from.
#[async_trait]
pub trait StartupRuntime: Send + Sync {
    /// What a successful launch returns
    type Server: Send;

    /// Identify the host project's framework
    async fn detect_framework(&self) -> Result<FrameworkKind>;

    /// Load the optional configuration file
    async fn load_config_file(&self) -> Result<Option<ConfigFile>>;

    /// Compute the catalog and project paths
    async fn load_paths(
        &self,
        source_dir: &str,
        build_dir: &str,
        framework: FrameworkKind,
        url_base: &str,
    ) -> Result<ResolvedPaths>;

    /// Return a free port, preferring `preferred`
    async fn allocate_port(&self, preferred: u16) -> Result<u16>;

    /// Check whether a path exists
    async fn path_exists(&self, path: &Path) -> Result<bool>;

    /// Produce the base bundler configuration
    async fn build_bundler_config(&self, options: &BundlerOptions) -> Result<BundlerConfig>;

    /// Prepare on-disk scaffolding
    async fn setup_catalog(&self, paths: &ResolvedPaths) -> Result<()>;

    /// Start the dev server
    async fn launch_dev_server(&self, request: LaunchRequest) -> Result<Self::Server>;

    /// Open `url` in a browser; failures are not fatal to the caller
    async fn open_browser(&self, url: &str) -> Result<()>;
}
