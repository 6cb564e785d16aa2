//! Shared response handling for the reqwest-based clients.

use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Fail on non-2xx statuses, logging status and raw body for diagnosis.
///
/// The error body is forwarded unchanged inside [`ClientError::Api`] so the
/// UI layer can render whatever the server said.
pub async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    tracing::error!(%url, status = status.as_u16(), %body, "api request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
        body,
    })
}

/// Read a 2xx response body as JSON.
///
/// An empty body is mapped to `Value::Null` so callers can synthesize a
/// success payload for servers that answer 204-style.
pub async fn read_json(response: reqwest::Response) -> ClientResult<Value> {
    let response = ensure_success(response).await?;
    let text = response.text().await.map_err(ClientError::from)?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|err| ClientError::Parse(err.to_string()))
}
