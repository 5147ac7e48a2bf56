//! Authentication endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

use super::ApiClient;
use crate::error::AppResult;
use crate::forms::LoginForm;
use crate::session::TokenValidator;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    pub async fn login(&self, credentials: &LoginForm) -> AppResult<String> {
        let builder = self
            .request(Method::POST, "/auth/login", None)
            .json(credentials);
        let response: LoginResponse = self.send_json(builder).await?;
        Ok(response.token)
    }

    /// Ask the API whether `token` is still accepted.
    pub async fn validate_token(&self, token: &str) -> AppResult<bool> {
        let builder = self
            .request(Method::POST, "/auth/validate-token", Some(token))
            .json(&json!({}));
        let response = self.send(builder).await?;
        let text = response.text().await?;
        Ok(is_truthy(&text))
    }
}

#[async_trait]
impl TokenValidator for ApiClient {
    async fn validate_token(&self, token: &str) -> AppResult<bool> {
        ApiClient::validate_token(self, token).await
    }
}

/// Truthiness of a validity answer: `false`, `null`, `0`, `""` and an empty
/// body are falsy, anything else is truthy.
fn is_truthy(body: &str) -> bool {
    let body = body.trim();
    if body.is_empty() {
        return false;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => false,
        Ok(Value::Bool(b)) => b,
        Ok(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Ok(Value::String(s)) => !s.is_empty(),
        Ok(Value::Array(_)) | Ok(Value::Object(_)) => true,
        // Plain text body
        Err(_) => true,
    }
}
