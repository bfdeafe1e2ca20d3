//! Email relay client for the contact form.
//!
//! The form submits through a third-party transactional-email service
//! (an EmailJS-compatible HTTP API) parameterized by a service id, a
//! template id and a public key. A simulated transport stands in when
//! the binary runs with `--simulate`, matching the site's offline
//! variant: a short delay, then success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hosted relay endpoint.
pub const EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
/// Relay service identifier.
pub const SERVICE_ID: &str = "service_qkqvhcf";
/// Relay template identifier.
pub const TEMPLATE_ID: &str = "template_r2rk5x8";
/// Public access key.
pub const PUBLIC_KEY: &str = "hTlkW0VsK5UqJxin9";

/// The three contact-form fields, exactly as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Error type for relay operations.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The HTTP request itself failed (connect, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The relay answered with a non-success status
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Request body for the relay's send endpoint.
#[derive(Debug, Clone, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// One outbound delivery of a contact message.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// HTTP client for the hosted relay.
pub struct EmailJsClient {
    client: Client,
    base_url: String,
}

impl EmailJsClient {
    /// Client against the hosted endpoint.
    pub fn new() -> Self {
        Self::with_base_url(EMAILJS_BASE_URL)
    }

    /// Client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailTransport for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let url = format!("{}/api/v1.0/email/send", self.base_url);
        tracing::debug!(%url, from = %message.email, "sending contact message");

        let response = self
            .client
            .post(&url)
            .json(&SendRequest {
                service_id: SERVICE_ID,
                template_id: TEMPLATE_ID,
                user_id: PUBLIC_KEY,
                template_params: message,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(from = %message.email, "contact message accepted by relay");
        Ok(())
    }
}

/// Stand-in transport: waits a beat, then reports success.
pub struct SimulatedRelay {
    delay: Duration,
}

impl SimulatedRelay {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1200),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailTransport for SimulatedRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        tracing::info!(from = %message.email, "simulating contact message delivery");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_serializes_relay_field_names() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hello".into(),
        };
        let body = serde_json::to_value(SendRequest {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            user_id: PUBLIC_KEY,
            template_params: &message,
        })
        .unwrap();

        assert_eq!(body["service_id"], SERVICE_ID);
        assert_eq!(body["template_id"], TEMPLATE_ID);
        assert_eq!(body["user_id"], PUBLIC_KEY);
        assert_eq!(body["template_params"]["name"], "Ada");
        assert_eq!(body["template_params"]["email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "hello");
    }

    #[tokio::test]
    async fn simulated_relay_always_succeeds() {
        let relay = SimulatedRelay::with_delay(Duration::from_millis(1));
        let message = ContactMessage {
            name: "n".into(),
            email: "e@example.com".into(),
            message: "m".into(),
        };
        assert!(relay.send(&message).await.is_ok());
    }
}
