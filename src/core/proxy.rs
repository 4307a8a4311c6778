//! Auth backend proxy
//!
//! Forwards `POST /api/auth/{*path}` to the configured authentication
//! backend so the browser only ever talks to its own origin:
//! - Content-Type and X-CSRF-Token are passed through
//! - upstream status and body are returned unchanged
//! - without `AUTH_BACKEND_URL` every call answers 503 with a JSON message

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;

use crate::core::api::ErrorBody;
use crate::core::config::Config;

const CSRF_HEADER_NAME: HeaderName = HeaderName::from_static("x-csrf-token");

/// Proxy error types
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Authentication backend is not configured")]
    NotConfigured,

    #[error("Invalid API path")]
    InvalidPath,

    #[error("Authentication backend is unavailable")]
    Upstream(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::InvalidPath => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Proxy state shared by all requests
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend: Option<Arc<str>>,
}

impl ProxyState {
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout())
            .build()
            .map_err(ProxyError::Client)?;

        Ok(Self {
            client,
            backend: config.auth_backend_url.as_deref().map(Arc::from),
        })
    }
}

/// Join the backend base URL and a proxied path.
///
/// Only plain path segments made of ASCII alphanumerics, `-` and `_` are
/// accepted, so a request can never escape the backend's auth namespace.
pub fn upstream_url(backend: &str, path: &str) -> Result<String, ProxyError> {
    let path = path.trim_matches('/');
    let valid_segment = |segment: &str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    };

    if path.is_empty() || !path.split('/').all(valid_segment) {
        return Err(ProxyError::InvalidPath);
    }

    Ok(format!("{}/{}", backend.trim_end_matches('/'), path))
}

/// Create the proxy router
pub fn auth_proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/auth/{*path}", post(forward_handler))
        .with_state(state)
}

async fn forward_handler(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let backend = state.backend.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(backend, &path)?;

    let mut request = state.client.post(&url).body(body);
    for name in [header::CONTENT_TYPE, CSRF_HEADER_NAME] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%path, error = %e, "Auth backend request failed");
        ProxyError::Upstream(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(ProxyError::Upstream)?;

    tracing::debug!(%path, %status, "Proxied auth request");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(backend: Option<&str>) -> ProxyState {
        let config = Config::from_lookup(|key| match key {
            "AUTH_BACKEND_URL" => backend.map(str::to_string),
            _ => None,
        });
        ProxyState::new(&config).expect("client builds")
    }

    #[test]
    fn test_upstream_url_joins_paths() {
        assert_eq!(
            upstream_url("https://auth.example.com/", "verify-otp").unwrap(),
            "https://auth.example.com/verify-otp"
        );
        assert_eq!(
            upstream_url("http://localhost:8080/v1", "/password/reset_token/").unwrap(),
            "http://localhost:8080/v1/password/reset_token"
        );
    }

    #[test]
    fn test_upstream_url_rejects_traversal() {
        for path in ["", "/", "../admin", "login/..", "a//b", "login?x=1", "a%2e"] {
            assert!(
                matches!(upstream_url("http://b", path), Err(ProxyError::InvalidPath)),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            ProxyError::NotConfigured.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ProxyError::InvalidPath.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_forward_without_backend() {
        let result = forward_handler(
            State(state_for(None)),
            Path("verify-otp".to_string()),
            HeaderMap::new(),
            Bytes::new(),
        )
        .await;

        assert!(matches!(result, Err(ProxyError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_forward_rejects_bad_path_before_sending() {
        let result = forward_handler(
            State(state_for(Some("http://127.0.0.1:9"))),
            Path("../internal".to_string()),
            HeaderMap::new(),
            Bytes::from_static(b"{}"),
        )
        .await;

        assert!(matches!(result, Err(ProxyError::InvalidPath)));
    }
}
