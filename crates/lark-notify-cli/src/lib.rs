//! Drone plugin that reports pipeline results to a Lark bot webhook.

pub mod notify;
pub mod transport;

pub use notify::{NotifyError, Outcome, RunOptions, notify, prepare, run};
pub use transport::{Delivery, Transport, TransportError, WebhookClient};
