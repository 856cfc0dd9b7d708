//! HTTP client for the Newsroom REST API.
//!
//! Every request funnels through [`ApiClient::execute`], which attaches the
//! bearer token and classifies the response status into [`ApiError`] exactly
//! once — page code never inspects raw status codes.

use std::sync::OnceLock;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL.
pub fn get_api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or("/api/v1")
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(get_api_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client carrying an authentication token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(self.client.get(self.url(path))).await
    }

    pub async fn get_query(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.execute(self.client.get(self.url(path)).query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(self.client.delete(self.url(path))).await
    }

    async fn execute(&self, mut request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        if let Some(token) = &self.auth_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        // An empty or non-JSON body is not an error by itself; the envelope
        // layer treats Null as "nothing recognizable" and falls back.
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        classify(status, body)
    }
}

fn classify(status: StatusCode, body: Value) -> Result<Value, ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if status.is_server_error() {
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }
    if status.is_client_error() {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request failed")
            .to_string();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unauthorized_wins_over_generic_client_error() {
        let err = classify(StatusCode::UNAUTHORIZED, json!({"message": "expired"})).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn server_errors_keep_the_status() {
        match classify(StatusCode::BAD_GATEWAY, Value::Null).unwrap_err() {
            ApiError::Server { status } => assert_eq!(status, 502),
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn client_errors_surface_the_backend_message() {
        match classify(StatusCode::UNPROCESSABLE_ENTITY, json!({"message": "title is required"}))
            .unwrap_err()
        {
            ApiError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "title is required");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn client_errors_without_a_message_get_a_fallback() {
        match classify(StatusCode::NOT_FOUND, Value::Null).unwrap_err() {
            ApiError::Api { message, .. } => assert_eq!(message, "Request failed"),
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn success_passes_the_body_through() {
        let body = classify(StatusCode::OK, json!({"data": []})).unwrap();
        assert_eq!(body, json!({"data": []}));
    }
}
