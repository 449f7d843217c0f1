//! Core domain types for lark-notify.
//!
//! This crate contains:
//! - Pipeline event metadata
//! - Lark interactive card model
//! - Card composition for BUILD and DEPLOY events
//! - Webhook signing and the signed envelope

pub mod card;
pub mod compose;
pub mod envelope;
pub mod error;
pub mod event;
pub mod sign;

pub use card::{Element, Header, HeaderTemplate, Locale, MessageCard};
pub use compose::compose;
pub use envelope::{MSG_TYPE_INTERACTIVE, SignedEnvelope};
pub use error::{Error, Result};
pub use event::{BuildInfo, CommitInfo, EventKind, PipelineEvent, RepoInfo};
pub use sign::sign;
