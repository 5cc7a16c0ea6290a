//! Ledger connection and signing-key configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Public devnet endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Solana CLI's default keypair location.
pub const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

fn default_rpc_url() -> String {
    String::from(DEFAULT_RPC_URL)
}

fn default_keypair_path() -> String {
    String::from(DEFAULT_KEYPAIR_PATH)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint memo transactions are sent to.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Path to a JSON array of 64 secret-key bytes. A leading `~/` is
    /// resolved against the home directory.
    #[serde(default = "default_keypair_path")]
    pub keypair_path: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            keypair_path: default_keypair_path(),
        }
    }
}

impl LedgerConfig {
    /// Keypair path with `~` expanded.
    #[must_use]
    pub fn resolved_keypair_path(&self) -> PathBuf {
        expand_home(&self.keypair_path)
    }
}

fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
