//! HTTP client of the persistence service.
//!
//! Every call resolves to `Result<T, GatewayError>`; a missing collection
//! comes back as `GatewayError::NotProvisioned`.

use contracts::shared::api_error::{ApiErrorBody, ApiErrorCode};
use contracts::shared::gateway::GatewayError;
use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

fn request(method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
    let builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .header("Accept", "application/json");
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> GatewayError {
    GatewayError::Network(e.to_string())
}

/// Error for a non-2xx response, from its JSON body when there is one
pub fn error_from_status(status: u16, body: Option<ApiErrorBody>) -> GatewayError {
    match body {
        Some(body) => GatewayError::from_body(body),
        None => GatewayError::Api {
            code: match status {
                401 => ApiErrorCode::Unauthorized,
                403 => ApiErrorCode::Forbidden,
                404 => ApiErrorCode::NotFound,
                _ => ApiErrorCode::Internal,
            },
            message: format!("HTTP {}", status),
        },
    }
}

async fn check(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.json::<ApiErrorBody>().await.ok();
    Err(error_from_status(status, body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Network(format!("Failed to parse response: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, GatewayError> {
    let response = request(Method::GET, path, token)
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn get_text(path: &str, token: Option<&str>) -> Result<String, GatewayError> {
    let response = request(Method::GET, path, token)
        .send()
        .await
        .map_err(network)?;
    check(response).await?.text().await.map_err(network)
}

/// Sends `body` as JSON and decodes the JSON answer
pub async fn send_json<B, T>(
    method: Method,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, GatewayError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = request(method, path, token)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

/// Sends `body` as JSON; the answer body is ignored
pub async fn send(
    method: Method,
    path: &str,
    body: &impl Serialize,
    token: Option<&str>,
) -> Result<(), GatewayError> {
    let response = request(method, path, token)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str, token: Option<&str>) -> Result<(), GatewayError> {
    let response = request(Method::DELETE, path, token)
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}
