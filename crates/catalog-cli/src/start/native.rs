//! Native implementation of [`StartupRuntime`].

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::runtime::StartupRuntime;
use crate::bundler::{self, BundlerConfig, BundlerOptions};
use crate::config::{self, ConfigFile};
use crate::dev::{self, DevServerHandle, LaunchRequest};
use crate::error::{CliError, ResolveError, Result};
use crate::framework::{self, FrameworkKind};
use crate::paths::ResolvedPaths;
use crate::{browser, port, setup};

/// Runs the startup sequence against the real filesystem, network and browser.
#[derive(Debug, Clone)]
pub struct NativeRuntime {
    root: PathBuf,
}

impl NativeRuntime {
    /// Runtime for the project in the current directory.
    ///
    /// # Errors
    ///
    /// Fails when the current directory cannot be determined.
    pub fn new() -> Result<Self> {
        let root = std::env::current_dir().map_err(ResolveError::ProjectRoot)?;
        Ok(Self::with_root(root))
    }

    /// Runtime for the project at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl StartupRuntime for NativeRuntime {
    type Server = DevServerHandle;

    async fn detect_framework(&self) -> Result<FrameworkKind> {
        Ok(framework::detect_framework(&self.root).await?)
    }

    async fn load_config_file(&self) -> Result<Option<ConfigFile>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || config::load_config_file(&root))
            .await
            .map_err(|e| CliError::Custom(format!("Config loader task failed: {e}")))?
            .map_err(CliError::from)
    }

    async fn load_paths(
        &self,
        source_dir: &str,
        build_dir: &str,
        framework: FrameworkKind,
        url_base: &str,
    ) -> Result<ResolvedPaths> {
        Ok(ResolvedPaths::resolve(
            &self.root, source_dir, build_dir, framework, url_base,
        ))
    }

    async fn allocate_port(&self, preferred: u16) -> Result<u16> {
        Ok(port::allocate_port(preferred)?)
    }

    async fn path_exists(&self, path: &Path) -> Result<bool> {
        Ok(tokio::fs::try_exists(path).await?)
    }

    async fn build_bundler_config(&self, options: &BundlerOptions) -> Result<BundlerConfig> {
        Ok(bundler::build_config(options)?)
    }

    async fn setup_catalog(&self, paths: &ResolvedPaths) -> Result<()> {
        Ok(setup::setup_catalog(paths).await?)
    }

    async fn launch_dev_server(&self, request: LaunchRequest) -> Result<DevServerHandle> {
        Ok(dev::launch(request).await?)
    }

    async fn open_browser(&self, url: &str) -> Result<()> {
        Ok(browser::open_browser(url)?)
    }
}
