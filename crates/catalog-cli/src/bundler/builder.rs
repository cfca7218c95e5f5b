use serde_json::Map;
use std::collections::BTreeMap;

use super::{
    BabelConfig, BuildMode, BundlerConfig, BundlerOptions, DevServerConfig, OutputConfig,
    ResolveConfig,
};
use crate::error::BundlerError;
use crate::framework::FrameworkKind;

const RESOLVE_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".mjs", ".json"];
const DEV_DEVTOOL: &str = "cheap-module-source-map";
const OUTPUT_FILENAME: &str = "catalog.js";

/// Build the base bundler configuration for a catalog.
///
/// # Errors
///
/// Returns [`BundlerError::Invalid`] when the options cannot describe a
/// servable catalog, e.g. a public URL without a trailing slash.
pub fn build_config(options: &BundlerOptions) -> Result<BundlerConfig, BundlerError> {
    let paths = &options.paths;
    if !paths.public_url.ends_with('/') {
        return Err(BundlerError::Invalid(format!(
            "public URL '{}' must end with '/'",
            paths.public_url
        )));
    }

    let (mode, devtool, node_env) = if options.dev {
        (BuildMode::Development, Some(DEV_DEVTOOL.to_string()), "development")
    } else {
        (BuildMode::Production, None, "production")
    };

    let mut define = BTreeMap::new();
    define.insert("process.env.NODE_ENV".to_string(), js_string(node_env));
    define.insert(
        "process.env.PUBLIC_URL".to_string(),
        js_string(paths.public_url.trim_end_matches('/')),
    );

    let mut alias = BTreeMap::new();
    alias.insert("catalog".to_string(), paths.catalog_src_dir.clone());

    // The rendered catalog page must shadow an app's own `index.html`.
    let mut content_base = vec![
        paths.catalog_build_dir.clone(),
        paths.catalog_static_dir.clone(),
    ];
    content_base.extend(paths.app_static_dir.clone());
    content_base.push(paths.catalog_src_dir.clone());

    tracing::debug!(
        framework = %options.framework,
        babelrc = options.use_babelrc,
        "building bundler configuration"
    );

    Ok(BundlerConfig {
        mode,
        devtool,
        entry: vec![paths.catalog_index_js.clone()],
        output: OutputConfig {
            path: paths.catalog_build_dir.clone(),
            public_path: paths.public_url.clone(),
            filename: OUTPUT_FILENAME.to_string(),
        },
        resolve: ResolveConfig {
            extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            modules: vec!["node_modules".into(), paths.app_node_modules.clone()],
            alias,
        },
        babel: BabelConfig {
            babelrc: options.use_babelrc,
            presets: presets_for(options.framework),
        },
        define,
        dev_server: DevServerConfig {
            content_base,
            history_api_fallback: true,
            https: None,
            headers: BTreeMap::new(),
        },
        extra: Map::new(),
    })
}

fn presets_for(framework: FrameworkKind) -> Vec<String> {
    let presets: &[&str] = match framework {
        FrameworkKind::CreateReactApp => &["react-app"],
        FrameworkKind::Next => &["next/babel"],
        FrameworkKind::Unknown => &["env", "react"],
    };
    presets.iter().map(|preset| preset.to_string()).collect()
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::ResolvedPaths;
    use std::path::{Path, PathBuf};

    fn options(framework: FrameworkKind) -> BundlerOptions {
        BundlerOptions {
            paths: ResolvedPaths::resolve(Path::new("/app"), "catalog", "", framework, "/"),
            dev: true,
            framework,
            url: "http://localhost:4000/".to_string(),
            use_babelrc: false,
        }
    }

    #[test]
    fn test_development_defaults() {
        let config = build_config(&options(FrameworkKind::Unknown)).unwrap();

        assert_eq!(config.mode, BuildMode::Development);
        assert_eq!(config.devtool.as_deref(), Some("cheap-module-source-map"));
        assert_eq!(config.entry, vec![PathBuf::from("/app/catalog/index.js")]);
        assert_eq!(config.output.path, Path::new("/app/catalog/build"));
        assert_eq!(config.output.public_path, "/");
        assert_eq!(config.resolve.extensions, [".js", ".jsx", ".mjs", ".json"]);
        assert_eq!(
            config.resolve.alias.get("catalog").map(PathBuf::as_path),
            Some(Path::new("/app/catalog"))
        );
        assert_eq!(config.define["process.env.NODE_ENV"], "\"development\"");
        assert_eq!(config.define["process.env.PUBLIC_URL"], "\"\"");
        assert!(config.dev_server.history_api_fallback);
        assert!(config.dev_server.https.is_none());
    }

    #[test]
    fn test_presets_follow_framework() {
        let cra = build_config(&options(FrameworkKind::CreateReactApp)).unwrap();
        assert_eq!(cra.babel.presets, ["react-app"]);

        let next = build_config(&options(FrameworkKind::Next)).unwrap();
        assert_eq!(next.babel.presets, ["next/babel"]);

        let plain = build_config(&options(FrameworkKind::Unknown)).unwrap();
        assert_eq!(plain.babel.presets, ["env", "react"]);
    }

    #[test]
    fn test_babelrc_decision_is_carried() {
        let mut opts = options(FrameworkKind::Unknown);
        opts.use_babelrc = true;
        assert!(build_config(&opts).unwrap().babel.babelrc);
    }

    #[test]
    fn test_content_base_order() {
        let config = build_config(&options(FrameworkKind::CreateReactApp)).unwrap();
        assert_eq!(
            config.dev_server.content_base,
            vec![
                PathBuf::from("/app/catalog/build"),
                PathBuf::from("/app/catalog/static"),
                PathBuf::from("/app/public"),
                PathBuf::from("/app/catalog"),
            ]
        );
    }

    #[test]
    fn test_production_build() {
        let mut opts = options(FrameworkKind::Unknown);
        opts.dev = false;
        let config = build_config(&opts).unwrap();

        assert_eq!(config.mode, BuildMode::Production);
        assert_eq!(config.devtool, None);
        assert_eq!(config.define["process.env.NODE_ENV"], "\"production\"");
    }

    #[test]
    fn test_public_url_without_slash_is_invalid() {
        let mut opts = options(FrameworkKind::Unknown);
        opts.paths.public_url = "/catalog".to_string();

        let err = build_config(&opts).unwrap_err();
        assert!(err.to_string().contains("must end with '/'"));
    }

    #[test]
    fn test_serializes_in_webpack_layout() {
        let config = build_config(&options(FrameworkKind::Unknown)).unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["mode"], "development");
        assert_eq!(value["output"]["publicPath"], "/");
        assert_eq!(value["devServer"]["historyApiFallback"], true);
        assert!(value["devServer"].get("https").is_none());
    }
}
