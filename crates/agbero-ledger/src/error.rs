use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("cannot read keypair file '{path}': {source}")]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("keypair file '{path}' is not a JSON byte array: {reason}")]
    KeyFormat { path: PathBuf, reason: String },
    #[error("invalid keypair bytes: {0}")]
    InvalidKeypair(String),
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("rpc error: {0}")]
    Rpc(String),
    #[error("ledger submission disabled (offline mode)")]
    Offline,
}
