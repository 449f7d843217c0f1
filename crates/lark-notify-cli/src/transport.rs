//! Webhook transport.

use async_trait::async_trait;
use lark_notify_core::SignedEnvelope;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Encode(#[from] lark_notify_core::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Result of a completed request/response exchange.
///
/// Non-2xx statuses are still a completed delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts a signed envelope to a webhook.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        url: &str,
        envelope: &SignedEnvelope,
    ) -> Result<Delivery, TransportError>;
}

/// HTTP transport backed by reqwest. Makes exactly one attempt per send.
pub struct WebhookClient {
    client: reqwest::Client,
    debug: bool,
}

impl WebhookClient {
    pub fn new(debug: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            debug,
        }
    }
}

#[async_trait]
impl Transport for WebhookClient {
    async fn send(
        &self,
        url: &str,
        envelope: &SignedEnvelope,
    ) -> Result<Delivery, TransportError> {
        let body = envelope.to_json()?;
        if self.debug {
            info!(body = %String::from_utf8_lossy(&body), "Request body");
        }

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        info!(status = %status, "Response status");

        let text = response.text().await.map_err(TransportError::Body)?;
        if self.debug {
            info!(body = %text, "Response body");
        }

        Ok(Delivery {
            status: status.as_u16(),
            body: text,
        })
    }
}
