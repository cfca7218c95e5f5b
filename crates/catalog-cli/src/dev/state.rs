//! Shared state for the dev server handlers.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::bundler::BundlerConfig;
use crate::dev::proxy::Proxy;

/// State shared by all request handlers.
pub type SharedState = Arc<ServerState>;

#[derive(Debug)]
pub struct ServerState {
    /// Final bundler configuration, served at the config endpoint
    pub config_json: Value,
    /// URL prefix of the catalog, ends in `/`
    pub public_path: String,
    /// Directories searched for static files, in order
    pub content_base: Vec<PathBuf>,
    pub history_api_fallback: bool,
    /// Extra headers added to every static response
    pub headers: Vec<(String, String)>,
    pub proxy: Option<Proxy>,
}

impl ServerState {
    pub fn new(config: &BundlerConfig, proxy: Option<Proxy>) -> Self {
        Self {
            config_json: serde_json::to_value(config).unwrap_or(Value::Null),
            public_path: config.output.public_path.clone(),
            content_base: config.dev_server.content_base.clone(),
            history_api_fallback: config.dev_server.history_api_fallback,
            headers: config
                .dev_server
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            proxy,
        }
    }

    /// Map a request path onto a path relative to the content bases.
    ///
    /// Returns `None` for paths outside the public path or containing
    /// parent-directory components.
    pub fn relative_path(&self, request_path: &str) -> Option<PathBuf> {
        let public = self.public_path.trim_end_matches('/');
        let rest = request_path.strip_prefix(public)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }

        let relative = Path::new(rest.trim_start_matches('/'));
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return None;
        }
        Some(relative.to_path_buf())
    }

    /// First existing file for `relative` in the content bases.
    ///
    /// Directories resolve to their `index.html`.
    pub async fn find_file(&self, relative: &Path) -> Option<PathBuf> {
        for base in &self.content_base {
            let mut candidate = base.join(relative);
            if tokio::fs::metadata(&candidate)
                .await
                .is_ok_and(|meta| meta.is_dir())
            {
                candidate.push("index.html");
            }
            if tokio::fs::metadata(&candidate)
                .await
                .is_ok_and(|meta| meta.is_file())
            {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::build_config;
    use crate::bundler::BundlerOptions;
    use crate::framework::FrameworkKind;
    use crate::paths::ResolvedPaths;
    use tempfile::TempDir;

    fn state_for(root: &Path, url_base: &str) -> ServerState {
        let paths = ResolvedPaths::resolve(root, "catalog", "", FrameworkKind::Unknown, url_base);
        let config = build_config(&BundlerOptions {
            paths,
            dev: true,
            framework: FrameworkKind::Unknown,
            url: "http://localhost:4000/".to_string(),
            use_babelrc: false,
        })
        .unwrap();
        ServerState::new(&config, None)
    }

    #[test]
    fn test_relative_path_at_root() {
        let state = state_for(Path::new("/app"), "/");
        assert_eq!(state.relative_path("/"), Some(PathBuf::new()));
        assert_eq!(
            state.relative_path("/static/logo.png"),
            Some(PathBuf::from("static/logo.png"))
        );
    }

    #[test]
    fn test_relative_path_under_public_path() {
        let state = state_for(Path::new("/app"), "/docs/");
        assert_eq!(state.relative_path("/docs"), Some(PathBuf::new()));
        assert_eq!(state.relative_path("/docs/a.js"), Some(PathBuf::from("a.js")));
        assert_eq!(state.relative_path("/docsx/a.js"), None);
        assert_eq!(state.relative_path("/other/a.js"), None);
    }

    #[test]
    fn test_relative_path_rejects_traversal() {
        let state = state_for(Path::new("/app"), "/");
        assert_eq!(state.relative_path("/../etc/passwd"), None);
        assert_eq!(state.relative_path("/static/../../secret"), None);
    }

    #[tokio::test]
    async fn test_find_file_searches_bases_in_order() {
        let dir = TempDir::new().unwrap();
        let state = state_for(dir.path(), "/");
        let catalog = dir.path().join("catalog");
        std::fs::create_dir_all(catalog.join("static")).unwrap();
        std::fs::create_dir_all(catalog.join("build")).unwrap();
        std::fs::write(catalog.join("static/app.css"), "static").unwrap();
        std::fs::write(catalog.join("app.css"), "src").unwrap();
        std::fs::write(catalog.join("build/index.html"), "<html>").unwrap();

        assert_eq!(
            state.find_file(Path::new("app.css")).await,
            Some(catalog.join("static/app.css"))
        );
        assert_eq!(
            state.find_file(Path::new("")).await,
            Some(catalog.join("build").join("index.html"))
        );
        assert_eq!(state.find_file(Path::new("missing.js")).await, None);
    }
}
