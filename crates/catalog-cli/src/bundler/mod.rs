//! Bundler configuration for the catalog.
//!
//! [`BundlerConfig`] mirrors the layout of a webpack configuration so that
//! override tables written for the original tooling keep their shape. The
//! startup sequence treats it as opaque; only the dev server reads it.

mod builder;

pub use builder::build_config;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::framework::FrameworkKind;
use crate::paths::ResolvedPaths;

/// Inputs to the bundler configuration builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerOptions {
    /// Resolved catalog and project paths
    pub paths: ResolvedPaths,
    /// Development build
    pub dev: bool,
    /// Host project framework
    pub framework: FrameworkKind,
    /// URL the catalog will be served at
    pub url: String,
    /// Whether the project's `.babelrc` is honoured
    pub use_babelrc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

/// Bundler configuration in webpack's camelCase layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub mode: BuildMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
    pub entry: Vec<PathBuf>,
    pub output: OutputConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub babel: BabelConfig,
    /// Compile-time constants, values are JavaScript expressions
    #[serde(default)]
    pub define: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_server: DevServerConfig,
    /// Top-level keys Catalog does not interpret, kept for the override
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub path: PathBuf,
    /// URL prefix every asset is served under, ends in `/`
    pub public_path: String,
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveConfig {
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub modules: Vec<PathBuf>,
    #[serde(default)]
    pub alias: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelConfig {
    /// Read the project's `.babelrc`
    #[serde(default)]
    pub babelrc: bool,
    #[serde(default)]
    pub presets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Directories searched, in order, for static files
    #[serde(default)]
    pub content_base: Vec<PathBuf>,
    /// Serve `index.html` for unknown HTML routes
    #[serde(default)]
    pub history_api_fallback: bool,
    /// Certificate material used when serving over HTTPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<HttpsConfig>,
    /// Extra response headers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

/// PEM certificate and private key for the HTTPS dev server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpsConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}
