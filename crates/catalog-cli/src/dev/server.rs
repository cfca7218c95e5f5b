//! HTTP routes of the dev server.
//!
//! Serves the catalog's static files from the configured content bases,
//! exposes the final bundler configuration and forwards everything else to
//! the proxy target.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};

use crate::dev::state::SharedState;

/// Route serving the final bundler configuration as JSON.
pub const CONFIG_ROUTE: &str = "/__catalog__/config.json";

/// Upper bound for request bodies relayed to the proxy target.
const MAX_PROXY_BODY: usize = 16 * 1024 * 1024;

/// Build the axum router with all routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route(CONFIG_ROUTE, get(handle_config))
        .fallback(handle_request)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn handle_config(State(state): State<SharedState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Json(state.config_json.clone()),
    )
}

/// Static files first, then the history fallback, then the proxy.
async fn handle_request(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let readable = method == Method::GET || method == Method::HEAD;

    if readable {
        if let Some(relative) = state.relative_path(uri.path()) {
            if let Some(file) = state.find_file(&relative).await {
                return serve_file(&state, &file, method == Method::HEAD).await;
            }

            if state.history_api_fallback
                && relative.extension().is_none()
                && accepts_html(&headers)
            {
                if let Some(index) = state.find_file(Path::new("index.html")).await {
                    tracing::debug!(path = uri.path(), "history fallback to index.html");
                    return serve_file(&state, &index, method == Method::HEAD).await;
                }
            }
        }
    }

    if let Some(proxy) = &state.proxy {
        let body = match axum::body::to_bytes(body, MAX_PROXY_BODY).await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (StatusCode::PAYLOAD_TOO_LARGE, format!("Request body: {e}"))
                    .into_response();
            }
        };
        return proxy.forward(method, &uri, &headers, body).await;
    }

    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("File not found: {}", uri.path()),
    )
        .into_response()
}

async fn serve_file(state: &SharedState, file: &Path, head_only: bool) -> Response {
    let content = match tokio::fs::read(file).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %file.display(), error = %e, "failed to read file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read {}", file.display()),
            )
                .into_response();
        }
    };

    let length = content.len();
    let body = if head_only {
        Body::empty()
    } else {
        Body::from(content)
    };

    let mut response = Response::new(body);
    let response_headers = response.headers_mut();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(determine_content_type(file)),
    );
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response_headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    for (name, value) in &state.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            response_headers.insert(name, value);
        }
    }
    response
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html") || accept.contains("*/*"))
}

/// Determine content type from file extension.
fn determine_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    match extension {
        "js" | "mjs" | "jsx" => "application/javascript",
        "json" | "map" => "application/json",
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "md" => "text/markdown; charset=utf-8",
        "txt" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}
