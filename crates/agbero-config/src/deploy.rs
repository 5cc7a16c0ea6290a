//! Deployment pipeline settings.

use serde::{Deserialize, Serialize};

fn default_network() -> String {
    String::from("devnet")
}

const fn default_funding_threshold() -> f64 {
    2.0
}

const fn default_airdrop() -> f64 {
    2.0
}

fn default_placeholder() -> String {
    String::from("Agbero1111111111111111111111111111111111111")
}

fn default_label() -> String {
    String::from("Program Id:")
}

fn default_patch_files() -> Vec<String> {
    vec![
        String::from("Anchor.toml"),
        String::from("programs/agbero/src/lib.rs"),
    ]
}

fn default_commit_message() -> String {
    String::from("Auto-deploy: Program deployed to devnet")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeployConfig {
    /// Cluster moniker passed to `solana config set --url`.
    #[serde(default = "default_network")]
    pub network: String,

    /// Below this balance (SOL) an airdrop is requested before building.
    #[serde(default = "default_funding_threshold")]
    pub funding_threshold_sol: f64,

    /// Amount requested by `solana airdrop`.
    #[serde(default = "default_airdrop")]
    pub airdrop_sol: f64,

    /// Program id baked into sources before the first deploy.
    #[serde(default = "default_placeholder")]
    pub placeholder_program_id: String,

    /// Label preceding the program id in `anchor deploy` output.
    #[serde(default = "default_label")]
    pub program_id_label: String,

    /// Files, relative to the project root, whose placeholder is replaced.
    #[serde(default = "default_patch_files")]
    pub patch_files: Vec<String>,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            funding_threshold_sol: default_funding_threshold(),
            airdrop_sol: default_airdrop(),
            placeholder_program_id: default_placeholder(),
            program_id_label: default_label(),
            patch_files: default_patch_files(),
            commit_message: default_commit_message(),
        }
    }
}
