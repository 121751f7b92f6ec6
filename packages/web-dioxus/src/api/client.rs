//! HTTP client for the auth endpoints of the Tableside API server

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Default base URL: the `API_BASE` environment variable at build time, or the
/// local development server.
const DEFAULT_API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080/api/v1",
};

/// Override the API base URL. Call this at startup, before any client is built.
pub fn init_api_base(url: String) {
    API_BASE.set(url).ok();
}

/// Get the configured API base URL
pub fn api_base() -> &'static str {
    API_BASE.get().map(|s| s.as_str()).unwrap_or(DEFAULT_API_BASE)
}

/// Error type for auth API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; the display text is the raw response body, which is
    /// what the server sends for user-facing failures.
    #[error("{body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct RequestOtpBody<'a> {
    phone_number: &'a str,
    device_id: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpBody<'a> {
    phone_number: &'a str,
    code: &'a str,
    device_id: &'a str,
}

/// Response of a successful verification
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpResponse {
    pub token: String,
}

/// Client for the two-step OTP authentication flow
#[derive(Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client against the configured base URL
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    /// Ask the server to send an OTP to the given phone number.
    ///
    /// The response body is arbitrary JSON; callers only care that the call
    /// succeeded.
    pub async fn request_otp(
        &self,
        phone_number: &str,
        device_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let body = RequestOtpBody {
            phone_number,
            device_id,
        };

        tracing::debug!("requesting OTP");
        let response = self
            .client
            .post(format!("{}/auth/request-otp", self.base_url))
            .header("Cache-Control", "no-store")
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await?.json().await.map_err(Into::into)
    }

    /// Verify an OTP and exchange it for a session token
    pub async fn verify_otp(
        &self,
        phone_number: &str,
        code: &str,
        device_id: &str,
    ) -> Result<VerifyOtpResponse, ApiError> {
        let body = VerifyOtpBody {
            phone_number,
            code,
            device_id,
        };

        tracing::debug!("verifying OTP");
        let response = self
            .client
            .post(format!("{}/auth/verify-otp", self.base_url))
            .header("Cache-Control", "no-store")
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await?.json().await.map_err(Into::into)
    }

    /// Map a non-success response to [`ApiError::Status`] carrying the body text
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "auth request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn init_api_base_overrides_compile_time_default() {
        assert_eq!(api_base(), DEFAULT_API_BASE);
        init_api_base("https://api.tableside.example/v1".to_string());
        assert_eq!(api_base(), "https://api.tableside.example/v1");
        // First override wins
        init_api_base("https://elsewhere.example".to_string());
        assert_eq!(api_base(), "https://api.tableside.example/v1");
    }

    #[tokio::test]
    async fn request_otp_posts_expected_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/request-otp"))
            .and(header("Cache-Control", "no-store"))
            .and(body_json(serde_json::json!({
                "phone_number": "+15551234567",
                "device_id": "dev-1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "expires_in": 300,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let value = client.request_otp("+15551234567", "dev-1").await.unwrap();
        assert_eq!(value["expires_in"], 300);
    }

    #[tokio::test]
    async fn request_otp_surfaces_error_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/request-otp"))
            .respond_with(ResponseTemplate::new(429).set_body_string("too many requests"))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let err = client.request_otp("+15551234567", "dev-1").await.unwrap_err();

        assert_eq!(err.to_string(), "too many requests");
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, 429),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn verify_otp_decodes_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/verify-otp"))
            .and(body_json(serde_json::json!({
                "phone_number": "+15551234567",
                "code": "123456",
                "device_id": "dev-1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "abc123",
            })))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let res = client
            .verify_otp("+15551234567", "123456", "dev-1")
            .await
            .unwrap();
        assert_eq!(res.token, "abc123");
    }

    #[tokio::test]
    async fn verify_otp_rejects_bad_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/verify-otp"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid or expired code"))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let err = client
            .verify_otp("+15551234567", "000000", "dev-1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid or expired code");
    }
}
