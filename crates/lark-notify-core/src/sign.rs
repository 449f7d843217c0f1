//! Webhook request signing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the webhook signature for a timestamp.
///
/// The string `"{timestamp}\n{secret}"` is used as the HMAC-SHA256 *key* and
/// the MAC is taken over an empty message. This is what the bot endpoint
/// verifies against, so it must not be "corrected" to key on the secret.
pub fn sign(timestamp: i64, secret: &str) -> String {
    let key = format!("{}\n{}", timestamp, secret);
    let mac = HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take any size key");
    STANDARD.encode(mac.finalize().into_bytes())
}
