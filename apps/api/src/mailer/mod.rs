//! Mailer: the single point of entry for outbound email.
//!
//! Wraps the Resend transactional email API. Handlers depend on the
//! `EmailSender` trait so delivery can be swapped or spied on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl MailError {
    /// The upstream message, without the local status prefix.
    pub fn message(&self) -> String {
        match self {
            MailError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A single plain-text email.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

/// Delivery acknowledgment returned by the email service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

/// Carried in `AppState` as `Arc<dyn EmailSender>`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<SendReceipt, MailError>;
}

/// Production sender backed by the Resend API.
#[derive(Clone)]
pub struct ResendClient {
    client: Client,
    endpoint: String,
}

impl ResendClient {
    pub fn new() -> Result<Self, MailError> {
        Self::with_endpoint(RESEND_API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, MailError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MailError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        // 2xx means the email was accepted; an unreadable receipt only loses the id.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

/// Resend errors look like `{"statusCode": 422, "name": "...", "message": "..."}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ResendError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_error_message_reads_resend_body() {
        let body = r#"{"statusCode": 403, "name": "validation_error", "message": "quota exceeded"}"#;
        assert_eq!(error_message(body), "quota exceeded");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("upstream timeout"), "upstream timeout");
    }

    #[test]
    fn test_mail_error_message_strips_status_prefix() {
        let err = MailError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.message(), "quota exceeded");
    }

    #[test]
    fn test_mail_error_message_blank_api_body_uses_display() {
        let err = MailError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.message(), "API error (status 500): ");
    }

    #[test]
    fn test_outgoing_email_serializes_resend_shape() {
        let email = OutgoingEmail {
            from: "Bot <bot@example.com>".into(),
            to: vec!["a@x.com".into(), "b@y.com".into()],
            subject: "Konu".into(),
            text: "Gövde".into(),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["to"], serde_json::json!(["a@x.com", "b@y.com"]));
        assert_eq!(json["text"], "Gövde");
    }

    #[test]
    fn test_receipt_tolerates_missing_id() {
        let receipt: SendReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.id.is_none());
    }

    // ── HTTP path against a local stub ───────────────────────────────────────

    /// Serves `router` on an ephemeral port and returns the `/emails` URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}/emails")
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Bot <bot@example.com>".into(),
            to: vec!["a@x.com".into(), "b@y.com".into()],
            subject: "Konu".into(),
            text: "Gövde".into(),
        }
    }

    /// Accepts only `Bearer re_test` and echoes the first recipient back as the id.
    async fn accept_with_auth(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, String) {
        let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
        if auth != Some("Bearer re_test") {
            return (
                StatusCode::UNAUTHORIZED,
                r#"{"statusCode": 401, "name": "missing_api_key", "message": "API key is invalid"}"#
                    .to_string(),
            );
        }
        let id = body["to"][0].as_str().unwrap_or_default().to_string();
        (StatusCode::OK, serde_json::json!({ "id": id }).to_string())
    }

    #[tokio::test]
    async fn send_posts_json_with_bearer_auth() {
        let url = spawn_stub(Router::new().route("/emails", post(accept_with_auth))).await;
        let client = ResendClient::with_endpoint(url).unwrap();

        let receipt = client.send("re_test", &email()).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("a@x.com"));
    }

    #[tokio::test]
    async fn send_maps_non_2xx_to_api_error() {
        let url = spawn_stub(Router::new().route("/emails", post(accept_with_auth))).await;
        let client = ResendClient::with_endpoint(url).unwrap();

        let err = client.send("re_wrong", &email()).await.unwrap_err();
        match &err {
            MailError::Api { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message, "API key is invalid");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(err.message(), "API key is invalid");
    }

    #[tokio::test]
    async fn send_accepts_2xx_with_unreadable_body() {
        let router = Router::new().route("/emails", post(|| async { (StatusCode::OK, "queued") }));
        let client = ResendClient::with_endpoint(spawn_stub(router).await).unwrap();

        let receipt = client.send("re_test", &email()).await.unwrap();
        assert!(receipt.id.is_none());
    }
}
