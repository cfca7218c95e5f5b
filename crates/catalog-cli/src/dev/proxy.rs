//! Forwarding of unanswered requests to the `--proxy` target.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use reqwest::Url;

use crate::error::LaunchError;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [header::HeaderName; 5] = [
    header::CONNECTION,
    header::HOST,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::PROXY_AUTHORIZATION,
];

#[derive(Debug, Clone)]
pub struct Proxy {
    client: reqwest::Client,
    target: Url,
}

impl Proxy {
    /// Create a proxy to `target`, which must be an http(s) URL.
    pub fn new(target: &str) -> Result<Self, LaunchError> {
        let invalid = |message: String| LaunchError::InvalidProxy {
            target: target.to_string(),
            message,
        };

        let url = Url::parse(target).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            target: url,
        })
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// URL on the target for an incoming request URI.
    pub fn upstream_url(&self, uri: &Uri) -> Option<Url> {
        let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
        let base = self.target.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path_and_query}")).ok()
    }

    /// Forward a request and relay the response.
    ///
    /// Upstream failures become `502 Bad Gateway`.
    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Response {
        let Some(url) = self.upstream_url(uri) else {
            return bad_gateway(format!("Invalid upstream URL for {uri}"));
        };

        let mut forwarded = headers.clone();
        for name in &HOP_BY_HOP {
            forwarded.remove(name);
        }

        tracing::debug!(%method, %url, "proxying request");
        let upstream = match self
            .client
            .request(method, url)
            .headers(forwarded)
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "proxy request failed");
                return bad_gateway(format!("Proxy error: {e}"));
            }
        };

        let status = upstream.status();
        let mut response_headers = upstream.headers().clone();
        for name in &HOP_BY_HOP {
            response_headers.remove(name);
        }
        response_headers.remove(header::CONTENT_LENGTH);

        match upstream.bytes().await {
            Ok(bytes) => {
                let mut response = Response::new(Body::from(bytes));
                *response.status_mut() = status;
                *response.headers_mut() = response_headers;
                response
            }
            Err(e) => bad_gateway(format!("Proxy error: {e}")),
        }
    }
}

fn bad_gateway(message: String) -> Response {
    (StatusCode::BAD_GATEWAY, message).into_response()
}
