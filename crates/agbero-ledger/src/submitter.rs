//! The memo submission seam.
//!
//! [`MemoSubmitter`] is what the activity logger talks to. The RPC-backed
//! implementation sends one transaction per memo and returns as soon as the
//! node accepts it: no retry, no confirmation polling.

use agbero_config::LedgerConfig;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::{Keypair, Signer};

use crate::error::LedgerError;
use crate::keypair::load_keypair;
use crate::transaction::memo_transaction;

#[allow(async_fn_in_trait)]
pub trait MemoSubmitter {
    /// Base58 public key that signs submitted memos.
    fn signer(&self) -> String;

    /// Where memos are sent, for stats and diagnostics.
    fn endpoint(&self) -> &str;

    /// Submit `memo` once. Returns the transaction signature.
    async fn submit_memo(&self, memo: &str) -> Result<String, LedgerError>;
}

pub struct SolanaMemoSubmitter {
    client: RpcClient,
    keypair: Keypair,
    rpc_url: String,
}

impl SolanaMemoSubmitter {
    #[must_use]
    pub fn new(rpc_url: &str, keypair: Keypair) -> Self {
        Self {
            client: RpcClient::new(rpc_url.to_string()),
            keypair,
            rpc_url: rpc_url.to_string(),
        }
    }

    /// Build from config, reading the keypair file eagerly.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let keypair = load_keypair(&config.resolved_keypair_path())?;
        Ok(Self::new(&config.rpc_url, keypair))
    }
}

impl MemoSubmitter for SolanaMemoSubmitter {
    fn signer(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    fn endpoint(&self) -> &str {
        &self.rpc_url
    }

    async fn submit_memo(&self, memo: &str) -> Result<String, LedgerError> {
        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .map_err(|e| LedgerError::Rpc(e.to_string()))?;

        let transaction = memo_transaction(memo, &self.keypair, blockhash);
        tracing::debug!(memo, rpc_url = %self.rpc_url, "sending memo transaction");

        let signature = self
            .client
            .send_transaction(&transaction)
            .await
            .map_err(|e| LedgerError::Rpc(e.to_string()))?;

        Ok(signature.to_string())
    }
}

/// Submitter that never reaches the network.
///
/// Every submission fails with [`LedgerError::Offline`], so callers fall back
/// to local identifiers while still hashing and counting activities.
#[derive(Debug, Clone)]
pub struct OfflineSubmitter {
    signer: String,
    endpoint: String,
}

impl OfflineSubmitter {
    #[must_use]
    pub fn new(signer: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            signer: signer.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Identity taken from the configured keypair when it can be read.
    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        let signer = load_keypair(&config.resolved_keypair_path())
            .map(|keypair| keypair.pubkey().to_string())
            .unwrap_or_else(|_| String::from("unknown"));
        Self::new(signer, config.rpc_url.clone())
    }
}

impl MemoSubmitter for OfflineSubmitter {
    fn signer(&self) -> String {
        self.signer.clone()
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit_memo(&self, _memo: &str) -> Result<String, LedgerError> {
        Err(LedgerError::Offline)
    }
}
