//! Signed webhook payload.

use serde::Serialize;

use crate::Result;
use crate::card::MessageCard;
use crate::sign::sign;

/// `msg_type` for interactive cards.
pub const MSG_TYPE_INTERACTIVE: &str = "interactive";

/// The JSON body posted to the webhook.
///
/// The signature is derived from the timestamp when the envelope is sealed;
/// neither can be changed afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SignedEnvelope {
    timestamp: i64,
    sign: String,
    msg_type: &'static str,
    card: MessageCard,
}

impl SignedEnvelope {
    /// Sign `card` for the given unix timestamp (seconds).
    pub fn seal(card: MessageCard, timestamp: i64, secret: &str) -> Self {
        Self {
            timestamp,
            sign: sign(timestamp, secret),
            msg_type: MSG_TYPE_INTERACTIVE,
            card,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn signature(&self) -> &str {
        &self.sign
    }

    pub fn msg_type(&self) -> &str {
        self.msg_type
    }

    pub fn card(&self) -> &MessageCard {
        &self.card
    }

    /// Encode the envelope as the JSON request body.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
