//! Integration tests for the development server.
//!
//! Starts real servers on ephemeral ports and talks to them over HTTP.

use axum::routing::get;
use axum::Router;
use catalog_cli::bundler::{build_config, BundlerConfig, BundlerOptions};
use catalog_cli::dev::{launch, LaunchRequest, CONFIG_ROUTE};
use catalog_cli::framework::FrameworkKind;
use catalog_cli::paths::ResolvedPaths;
use catalog_cli::setup::setup_catalog;
use catalog_cli::start::{run, NativeRuntime, StartupOptions};
use catalog_cli::LaunchError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn paths_for(project: &TempDir) -> ResolvedPaths {
    ResolvedPaths::resolve(project.path(), "catalog", "", FrameworkKind::Unknown, "/")
}

fn config_for(paths: &ResolvedPaths) -> BundlerConfig {
    build_config(&BundlerOptions {
        paths: paths.clone(),
        dev: true,
        framework: FrameworkKind::Unknown,
        url: "http://127.0.0.1:0/".to_string(),
        use_babelrc: false,
    })
    .unwrap()
}

fn request(paths: &ResolvedPaths, config: BundlerConfig, proxy: Option<String>) -> LaunchRequest {
    LaunchRequest {
        config,
        host: "127.0.0.1".to_string(),
        port: 0,
        https: false,
        paths: paths.clone(),
        framework: FrameworkKind::Unknown,
        proxy,
    }
}

#[tokio::test]
async fn serves_index_static_files_and_config() {
    let project = TempDir::new().unwrap();
    let paths = paths_for(&project);
    setup_catalog(&paths).await.unwrap();
    fs::write(paths.catalog_static_dir.join("logo.svg"), "<svg/>").unwrap();

    let server = launch(request(&paths, config_for(&paths), None))
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());
    let client = reqwest::Client::new();

    let index = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(index.status(), 200);
    assert!(index.text().await.unwrap().contains(r#"<div id="catalog">"#));

    let logo = client.get(format!("{base}/logo.svg")).send().await.unwrap();
    assert_eq!(logo.status(), 200);
    assert_eq!(logo.headers()["content-type"], "image/svg+xml");

    let entry = client.get(format!("{base}/index.js")).send().await.unwrap();
    assert_eq!(entry.status(), 200);
    assert_eq!(entry.headers()["content-type"], "application/javascript");

    let config: serde_json::Value = client
        .get(format!("{base}{CONFIG_ROUTE}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(config["mode"], "development");
    assert_eq!(config["output"]["publicPath"], "/");

    server.shutdown(Duration::from_secs(1)).await.unwrap();
}

#[tokio::test]
async fn history_fallback_serves_index_for_html_routes() {
    let project = TempDir::new().unwrap();
    let paths = paths_for(&project);
    setup_catalog(&paths).await.unwrap();

    let server = launch(request(&paths, config_for(&paths), None))
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());
    let client = reqwest::Client::new();

    let page = client
        .get(format!("{base}/components/button"))
        .header("accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(page.status(), 200);
    assert!(page.text().await.unwrap().contains("<html"));

    let missing = client
        .get(format!("{base}/missing.js"))
        .header("accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    let api = client
        .get(format!("{base}/api/users"))
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(api.status(), 404);

    server.shutdown(Duration::from_secs(1)).await.unwrap();
}

#[tokio::test]
async fn catalog_page_shadows_app_index_html() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("public")).unwrap();
    fs::write(
        project.path().join("public/index.html"),
        "<html>CRA APP %PUBLIC_URL%</html>",
    )
    .unwrap();
    fs::write(project.path().join("public/favicon.ico"), "icon").unwrap();

    let framework = FrameworkKind::CreateReactApp;
    let paths = ResolvedPaths::resolve(project.path(), "catalog", "", framework, "/");
    setup_catalog(&paths).await.unwrap();
    let config = build_config(&BundlerOptions {
        paths: paths.clone(),
        dev: true,
        framework,
        url: "http://127.0.0.1:0/".to_string(),
        use_babelrc: false,
    })
    .unwrap();

    let mut req = request(&paths, config, None);
    req.framework = framework;
    let server = launch(req).await.unwrap();
    let base = format!("http://{}", server.addr());
    let client = reqwest::Client::new();

    let index = client.get(format!("{base}/")).send().await.unwrap();
    let body = index.text().await.unwrap();
    assert!(body.contains(r#"<div id="catalog">"#));
    assert!(!body.contains("CRA APP"));

    let route = client
        .get(format!("{base}/components/button"))
        .header("accept", "text/html")
        .send()
        .await
        .unwrap();
    let body = route.text().await.unwrap();
    assert!(body.contains(r#"<div id="catalog">"#));
    assert!(!body.contains("%PUBLIC_URL%"));

    let favicon = client.get(format!("{base}/favicon.ico")).send().await.unwrap();
    assert_eq!(favicon.status(), 200);
    assert_eq!(favicon.text().await.unwrap(), "icon");

    server.shutdown(Duration::from_secs(1)).await.unwrap();
}

#[tokio::test]
async fn unanswered_requests_go_to_proxy() {
    let upstream = Router::new().route("/api/users", get(|| async { "from upstream" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream_addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let project = TempDir::new().unwrap();
    let paths = paths_for(&project);
    setup_catalog(&paths).await.unwrap();

    let server = launch(request(
        &paths,
        config_for(&paths),
        Some(format!("http://{upstream_addr}")),
    ))
    .await
    .unwrap();
    let base = format!("http://{}", server.addr());

    let response = reqwest::Client::new()
        .get(format!("{base}/api/users"))
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "from upstream");

    server.shutdown(Duration::from_secs(1)).await.unwrap();
}

#[tokio::test]
async fn occupied_address_is_a_bind_error() {
    let blocker = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = blocker.local_addr().unwrap().port();

    let project = TempDir::new().unwrap();
    let paths = paths_for(&project);
    let mut req = request(&paths, config_for(&paths), None);
    req.port = port;

    let err = launch(req).await.unwrap_err();
    assert!(matches!(err, LaunchError::Bind { .. }));
}

#[tokio::test]
async fn https_requires_certificate_material() {
    let project = TempDir::new().unwrap();
    let paths = paths_for(&project);
    let mut req = request(&paths, config_for(&paths), None);
    req.https = true;

    let err = launch(req).await.unwrap_err();
    assert!(matches!(err, LaunchError::MissingCertificate));
}

#[tokio::test]
async fn native_runtime_starts_catalog_end_to_end() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("package.json"),
        r#"{ "dependencies": { "react-scripts": "1.0.0" } }"#,
    )
    .unwrap();
    fs::write(
        project.path().join("catalog.config.toml"),
        "useBabelrc = false\n\n[webpack]\ndevtool = \"eval\"\n",
    )
    .unwrap();

    // SAFETY: no other test in this binary reads BROWSER.
    unsafe { std::env::set_var("BROWSER", "none") };

    let runtime = NativeRuntime::with_root(project.path());
    let options = StartupOptions {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..StartupOptions::default()
    };
    let server = run(&runtime, options).await.unwrap();

    assert!(server.url().starts_with("http://127.0.0.1:"));
    assert!(project.path().join("catalog/index.js").is_file());
    assert!(project.path().join("catalog/build/index.html").is_file());

    let config: serde_json::Value = reqwest::get(format!("http://{}{CONFIG_ROUTE}", server.addr()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(config["devtool"], "eval");
    assert_eq!(config["babel"]["presets"][0], "react-app");
    assert_eq!(config["babel"]["babelrc"], false);

    server.shutdown(Duration::from_secs(1)).await.unwrap();
}
