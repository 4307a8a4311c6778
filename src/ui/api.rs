//! Client calls to the auth API
//!
//! Thin `gloo-net` wrappers: JSON POST, optional `X-CSRF-Token`, non-2xx
//! responses turned into [`ApiError`] with the server's message.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::api::{ApiError, decode_success};

/// POST `body` (or nothing) and return the raw success body
#[cfg(not(feature = "ssr"))]
pub async fn send(path: &str, csrf_token: Option<&str>, body: Option<String>) -> Result<String, ApiError> {
    use crate::core::api::{CSRF_HEADER, error_from_response};
    use gloo_net::http::Request;

    let mut builder = Request::post(path).header("Content-Type", "application/json");
    if let Some(token) = csrf_token {
        builder = builder.header(CSRF_HEADER, token);
    }

    let request = match body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if ok {
        Ok(text)
    } else {
        Err(error_from_response(status, &text))
    }
}

#[cfg(feature = "ssr")]
pub async fn send(
    _path: &str,
    _csrf_token: Option<&str>,
    _body: Option<String>,
) -> Result<String, ApiError> {
    Err(ApiError::Network("Requests are not available on server".to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body and decode the JSON answer
pub async fn post_json<B, R>(path: &str, csrf_token: Option<&str>, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned + Default,
{
    let text = send(path, csrf_token, Some(encode(body)?)).await?;
    decode_success(&text)
}

/// POST and ignore whatever a successful response contains
pub async fn post_ack<B: Serialize>(
    path: &str,
    csrf_token: Option<&str>,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let body = body.map(encode).transpose()?;
    send(path, csrf_token, body).await.map(|_| ())
}
