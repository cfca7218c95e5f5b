//! Catalog development server.
//!
//! Serves the prepared catalog over HTTP or HTTPS:
//!
//! - `state` - content bases and proxy shared by the handlers
//! - `server` - axum routes
//! - `proxy` - forwarding to the `--proxy` target
//! - `handle` - the running server and its shutdown

mod handle;
mod proxy;
mod server;
mod state;

pub use handle::{DevServerHandle, SHUTDOWN_GRACE};
pub use proxy::Proxy;
pub use server::{build_router, CONFIG_ROUTE};
pub use state::{ServerState, SharedState};

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::bundler::BundlerConfig;
use crate::error::LaunchError;
use crate::framework::FrameworkKind;
use crate::paths::ResolvedPaths;
use crate::start::server_url;

/// Everything the dev server needs to start.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    /// Final bundler configuration
    pub config: BundlerConfig,
    pub host: String,
    pub port: u16,
    pub https: bool,
    pub paths: ResolvedPaths,
    pub framework: FrameworkKind,
    /// Target for requests the catalog cannot answer
    pub proxy: Option<String>,
}

/// Start the dev server on a background task.
///
/// Returns once the listener is bound.
///
/// # Errors
///
/// Fails when the host does not resolve, the proxy target is invalid, HTTPS
/// is requested without usable certificate material, or the address cannot
/// be bound.
pub async fn launch(request: LaunchRequest) -> Result<DevServerHandle, LaunchError> {
    let addr = resolve_bind_addr(&request.host, request.port).await?;
    let proxy = request.proxy.as_deref().map(Proxy::new).transpose()?;
    let tls = if request.https {
        Some(load_tls(&request.config).await?)
    } else {
        None
    };

    tracing::info!(
        address = %addr,
        https = request.https,
        framework = %request.framework,
        catalog = %request.paths.catalog_src_dir.display(),
        "starting dev server"
    );

    let app = build_router(Arc::new(ServerState::new(&request.config, proxy)));
    let handle = Handle::<SocketAddr>::new();

    let task = match tls {
        Some(tls) => tokio::spawn(
            axum_server::bind_rustls(addr, tls)
                .handle(handle.clone())
                .serve(app.into_make_service()),
        ),
        None => tokio::spawn(
            axum_server::bind(addr)
                .handle(handle.clone())
                .serve(app.into_make_service()),
        ),
    };

    let Some(bound) = handle.listening().await else {
        let message = match task.await {
            Ok(Err(e)) => e.to_string(),
            Ok(Ok(())) => "server stopped before listening".to_string(),
            Err(e) => e.to_string(),
        };
        return Err(LaunchError::Bind { addr, message });
    };

    let url = server_url(request.https, &request.host, bound.port());
    tracing::debug!(address = %bound, %url, "dev server listening");
    Ok(DevServerHandle::new(bound, url, handle, task))
}

/// Resolve `host:port`, preferring IPv4 addresses.
async fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr, LaunchError> {
    let unresolved = || LaunchError::UnresolvedHost {
        host: host.to_string(),
    };

    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
        .await
        .map_err(|_| unresolved())?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(unresolved)
}

async fn load_tls(config: &BundlerConfig) -> Result<RustlsConfig, LaunchError> {
    let https = config
        .dev_server
        .https
        .as_ref()
        .ok_or(LaunchError::MissingCertificate)?;

    RustlsConfig::from_pem_file(&https.cert, &https.key)
        .await
        .map_err(|e| {
            LaunchError::Tls(format!(
                "{} / {}: {e}",
                https.cert.display(),
                https.key.display()
            ))
        })
}
