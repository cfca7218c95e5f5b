//! Filesystem layout of a catalog and its host project.
//!
//! Every path is absolute. Relative inputs are joined onto the project root,
//! which is the directory `catalog` was started from.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::framework::FrameworkKind;

/// Canonical locations used by the bundler, the setup step and the dev server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPaths {
    /// Project root
    pub app_root: PathBuf,
    /// `<root>/src`
    pub app_src: PathBuf,
    /// `<root>/package.json`
    pub app_package_json: PathBuf,
    /// `<root>/node_modules`
    pub app_node_modules: PathBuf,
    /// The framework's public asset directory, if it has one
    pub app_static_dir: Option<PathBuf>,
    /// `<root>/.babelrc`
    pub babelrc: PathBuf,
    /// Catalog sources
    pub catalog_src_dir: PathBuf,
    /// Catalog entry point
    pub catalog_index_js: PathBuf,
    /// Optional user HTML template
    pub catalog_template: PathBuf,
    /// Static files served next to the catalog
    pub catalog_static_dir: PathBuf,
    /// Output directory
    pub catalog_build_dir: PathBuf,
    /// Public URL base, always ending in `/`
    pub public_url: String,
}

impl ResolvedPaths {
    /// Resolve the layout for a catalog in `source_dir` inside the project at `root`.
    ///
    /// An empty `build_dir` places the output in `<source_dir>/build`.
    ///
    /// # Example
    ///
    /// ```
    /// use catalog_cli::framework::FrameworkKind;
    /// use catalog_cli::paths::ResolvedPaths;
    /// use std::path::Path;
    ///
    /// let paths = ResolvedPaths::resolve(Path::new("/app"), "catalog", "", FrameworkKind::Unknown, "/");
    /// assert_eq!(paths.catalog_build_dir, Path::new("/app/catalog/build"));
    /// assert_eq!(paths.public_url, "/");
    /// ```
    pub fn resolve(
        root: &Path,
        source_dir: &str,
        build_dir: &str,
        framework: FrameworkKind,
        url_base: &str,
    ) -> Self {
        let catalog_src_dir = root.join(source_dir);
        let catalog_build_dir = if build_dir.is_empty() {
            catalog_src_dir.join("build")
        } else {
            root.join(build_dir)
        };

        Self {
            app_root: root.to_path_buf(),
            app_src: root.join("src"),
            app_package_json: root.join("package.json"),
            app_node_modules: root.join("node_modules"),
            app_static_dir: static_dir_name(framework).map(|name| root.join(name)),
            babelrc: root.join(".babelrc"),
            catalog_index_js: catalog_src_dir.join("index.js"),
            catalog_template: catalog_src_dir.join("index.html"),
            catalog_static_dir: catalog_src_dir.join("static"),
            catalog_build_dir,
            catalog_src_dir,
            public_url: normalize_public_url(url_base),
        }
    }
}

fn static_dir_name(framework: FrameworkKind) -> Option<&'static str> {
    match framework {
        FrameworkKind::CreateReactApp => Some("public"),
        FrameworkKind::Next => Some("static"),
        FrameworkKind::Unknown => None,
    }
}

/// Ensure the URL base ends with exactly one trailing slash.
pub fn normalize_public_url(url_base: &str) -> String {
    let trimmed = url_base.trim_end_matches('/');
    format!("{trimmed}/")
}
