//! Error types for lark-notify core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
