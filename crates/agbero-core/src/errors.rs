//! Cross-cutting error types for Agbero.
//!
//! Domain-specific errors (`LedgerError`, `DeployError`) live in their own
//! crates. The binary converges them through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A memo string does not have the `AGBERO:<action>:<hash>:<timestamp>` shape.
    #[error("Invalid memo '{memo}': {reason}")]
    InvalidMemo { memo: String, reason: String },

    /// A record could not be decoded from JSON.
    #[error("Invalid activity record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// The payload of an activity was not a JSON object.
    #[error("Activity data must be a JSON object, got {0}")]
    DataNotObject(String),
}
