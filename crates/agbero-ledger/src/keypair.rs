//! Solana CLI keypair files: a JSON array of 64 byte values (secret || public).

use std::fs;
use std::path::Path;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::error::LedgerError;

const KEYPAIR_LEN: usize = 64;

pub fn load_keypair(path: &Path) -> Result<Keypair, LedgerError> {
    let raw = fs::read_to_string(path).map_err(|source| LedgerError::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes: Vec<u8> = serde_json::from_str(&raw).map_err(|e| LedgerError::KeyFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    keypair_from_bytes(&bytes)
}

/// Public key of the keypair stored at `path`.
pub fn signer_pubkey(path: &Path) -> Result<Pubkey, LedgerError> {
    load_keypair(path).map(|keypair| keypair.pubkey())
}

pub fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair, LedgerError> {
    if bytes.len() != KEYPAIR_LEN {
        return Err(LedgerError::InvalidKeypair(format!(
            "expected {KEYPAIR_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    Keypair::from_bytes(bytes).map_err(|e| LedgerError::InvalidKeypair(e.to_string()))
}
