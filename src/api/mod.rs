//! HTTP client for the library management REST API
//!
//! Status codes are interpreted here and nowhere else; endpoint modules only
//! build requests and decode bodies.

pub mod auth;
pub mod books;
pub mod clients;
pub mod loans;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

pub const CLIENT_USER_AGENT: &str = concat!("library-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request, attaching the bearer token when there is one.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, authenticated = token.is_some(), "API request");

        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send and map non-success statuses to errors.
    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, url = %url, "API request failed");
        Err(AppError::from_status(status, error_message(&body, &url)))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = self.send(builder).await?;
        decode(response).await
    }
}

/// Decode a JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Decode the body of a write call. The write already succeeded, so an empty
/// or non-JSON body yields `None` rather than an error.
async fn decode_optional<T: DeserializeOwned>(response: Response) -> AppResult<Option<T>> {
    let url = response.url().to_string();
    let text = response.text().await?;
    Ok(parse_optional(&text, &url))
}

fn parse_optional<T: DeserializeOwned>(text: &str, url: &str) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(url = %url, error = %e, "discarding unreadable response body");
            None
        }
    }
}

/// Prefer the API's `message` field; fall back to the raw body, then to the URL.
fn error_message(body: &str, url: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => url.to_string(),
    }
}
