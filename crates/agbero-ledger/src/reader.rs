//! Read-only queries: program account state and recent signatures.
//!
//! Signature listings come back with the memos the node indexed, so the
//! published `AGBERO:` commitments can be read without fetching every
//! transaction.

use std::str::FromStr;

use agbero_config::LedgerConfig;
use serde::Serialize;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::error::LedgerError;

/// Account state of a deployed program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramInfo {
    pub address: String,
    pub exists: bool,
    pub executable: bool,
    pub lamports: u64,
    pub data_len: usize,
    /// Owning loader, absent when the account does not exist.
    pub owner: Option<String>,
}

/// One confirmed transaction that touched an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureActivity {
    pub signature: String,
    pub slot: u64,
    /// Unix seconds, when the node knows the block time.
    pub block_time: Option<i64>,
    pub success: bool,
    /// Memo texts carried by the transaction, length prefixes removed.
    pub memos: Vec<String>,
}

pub fn parse_address(address: &str) -> Result<Pubkey, LedgerError> {
    Pubkey::from_str(address).map_err(|e| LedgerError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Split the RPC `memo` field, `"[len] text; [len] text"`, into memo texts.
#[must_use]
pub fn split_rpc_memos(field: &str) -> Vec<String> {
    field
        .split("; ")
        .map(|part| {
            part.strip_prefix('[')
                .and_then(|rest| rest.split_once("] "))
                .filter(|(len, _)| len.chars().all(|c| c.is_ascii_digit()))
                .map_or(part, |(_, text)| text)
                .to_string()
        })
        .filter(|text| !text.is_empty())
        .collect()
}

pub struct LedgerReader {
    client: RpcClient,
    rpc_url: String,
}

impl LedgerReader {
    #[must_use]
    pub fn new(rpc_url: &str) -> Self {
        Self {
            client: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
            rpc_url: rpc_url.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(&config.rpc_url)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.rpc_url
    }

    pub async fn program_info(&self, program_id: &Pubkey) -> Result<ProgramInfo, LedgerError> {
        let account = self
            .client
            .get_account_with_commitment(program_id, CommitmentConfig::confirmed())
            .await
            .map_err(|e| LedgerError::Rpc(e.to_string()))?
            .value;

        Ok(account.map_or_else(
            || ProgramInfo {
                address: program_id.to_string(),
                exists: false,
                executable: false,
                lamports: 0,
                data_len: 0,
                owner: None,
            },
            |account| ProgramInfo {
                address: program_id.to_string(),
                exists: true,
                executable: account.executable,
                lamports: account.lamports,
                data_len: account.data.len(),
                owner: Some(account.owner.to_string()),
            },
        ))
    }

    /// Newest first, at most `limit` entries.
    pub async fn recent_activity(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureActivity>, LedgerError> {
        let config = GetConfirmedSignaturesForAddress2Config {
            before: None,
            until: None,
            limit: Some(limit),
            commitment: Some(CommitmentConfig::confirmed()),
        };
        tracing::debug!(%address, limit, rpc_url = %self.rpc_url, "listing signatures");

        let statuses = self
            .client
            .get_signatures_for_address_with_config(address, config)
            .await
            .map_err(|e| LedgerError::Rpc(e.to_string()))?;

        Ok(statuses
            .into_iter()
            .map(|status| SignatureActivity {
                signature: status.signature,
                slot: status.slot,
                block_time: status.block_time,
                success: status.err.is_none(),
                memos: status.memo.as_deref().map(split_rpc_memos).unwrap_or_default(),
            })
            .collect())
    }
}
