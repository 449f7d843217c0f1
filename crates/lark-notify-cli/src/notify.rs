//! One notification run: configuration, composition, signing and delivery.

use lark_notify_config::{ConfigError, NotifyConfig};
use lark_notify_core::{SignedEnvelope, compose};
use thiserror::Error;
use tracing::{debug, info};

use crate::transport::{Delivery, Transport, TransportError};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Per-invocation options that do not come from the plugin environment.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Unix timestamp (seconds) the envelope is signed with.
    pub timestamp: i64,
    /// Compose and sign, but do not post.
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Delivered(Delivery),
    DryRun(SignedEnvelope),
}

/// Build the signed envelope for a configured event.
pub fn prepare(config: &NotifyConfig, timestamp: i64) -> SignedEnvelope {
    let card = compose(&config.event);
    SignedEnvelope::seal(card, timestamp, &config.secret)
}

/// Compose, sign and deliver the notification for `config`.
pub async fn notify<T>(
    config: &NotifyConfig,
    transport: &T,
    timestamp: i64,
) -> Result<Delivery, TransportError>
where
    T: Transport + ?Sized,
{
    let envelope = prepare(config, timestamp);
    info!(
        kind = %config.event.kind,
        repo = %config.event.repo.name,
        build = %config.event.build.number,
        "Sending notification"
    );
    transport.send(&config.webhook, &envelope).await
}

/// Run a full notification.
///
/// Configuration is read through `lookup`. The transport is only created once
/// configuration has loaded, so a missing setting never reaches the network.
pub async fn run<F, M, T>(
    lookup: F,
    make_transport: M,
    options: RunOptions,
) -> Result<Outcome, NotifyError>
where
    F: Fn(&str) -> Option<String>,
    M: FnOnce(&NotifyConfig) -> T,
    T: Transport,
{
    let config = lark_notify_config::load(lookup)?;
    debug!(config = ?config, "Loaded configuration");

    if options.dry_run {
        let envelope = prepare(&config, options.timestamp);
        let body = envelope.to_json().map_err(TransportError::from)?;
        info!(body = %String::from_utf8_lossy(&body), "Dry run, not sending");
        return Ok(Outcome::DryRun(envelope));
    }

    let transport = make_transport(&config);
    let delivery = notify(&config, &transport, options.timestamp).await?;
    Ok(Outcome::Delivered(delivery))
}
