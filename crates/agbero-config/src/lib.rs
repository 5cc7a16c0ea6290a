//! # agbero-config
//!
//! Layered configuration loading for Agbero using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Legacy variables `SOLANA_RPC` and `VALIDATOR_KEYPAIR_PATH`
//! 2. Environment variables (`AGBERO_*` prefix, `__` as separator)
//! 3. Project-level `.agbero/config.toml`
//! 4. User-level `~/.config/agbero/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGBERO_LEDGER__RPC_URL` -> `ledger.rpc_url`,
//! `AGBERO_DEPLOY__FUNDING_THRESHOLD_SOL` -> `deploy.funding_threshold_sol`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use agbero_config::AgberoConfig;
//!
//! let config = AgberoConfig::load_with_dotenv(std::path::Path::new(".")).expect("config");
//! println!("RPC: {}", config.ledger.rpc_url);
//! ```

mod deploy;
mod error;
mod ledger;

pub use deploy::DeployConfig;
pub use error::ConfigError;
pub use ledger::{DEFAULT_KEYPAIR_PATH, DEFAULT_RPC_URL, LedgerConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable read for the RPC endpoint by earlier tooling.
pub const RPC_ENV: &str = "SOLANA_RPC";

/// Environment variable read for the keypair path by earlier tooling.
pub const KEYPAIR_ENV: &str = "VALIDATOR_KEYPAIR_PATH";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgberoConfig {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub deploy: DeployConfig,
}

impl AgberoConfig {
    /// Load configuration for a project rooted at `project_root`.
    ///
    /// Does NOT read `.env` files -- use [`Self::load_with_dotenv`] for that.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the project root (or the current directory) first,
    /// then build the figment. Typical entry point for the CLI.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)?;
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack more providers.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(".agbero").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("AGBERO_").split("__"));

        // Layer 4: Legacy single-purpose variables
        figment
            .merge(Env::raw().only(&[RPC_ENV]).map(|_| "ledger.rpc_url".into()))
            .merge(
                Env::raw()
                    .only(&[KEYPAIR_ENV])
                    .map(|_| "ledger.keypair_path".into()),
            )
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.rpc_url.trim().is_empty() {
            return Err(invalid("ledger.rpc_url", "must not be empty"));
        }
        if !self.deploy.funding_threshold_sol.is_finite() || self.deploy.funding_threshold_sol < 0.0
        {
            return Err(invalid(
                "deploy.funding_threshold_sol",
                "must be a non-negative number",
            ));
        }
        if !self.deploy.airdrop_sol.is_finite() || self.deploy.airdrop_sol <= 0.0 {
            return Err(invalid("deploy.airdrop_sol", "must be greater than zero"));
        }
        if self.deploy.program_id_label.is_empty() {
            return Err(invalid("deploy.program_id_label", "must not be empty"));
        }
        if self.deploy.placeholder_program_id.is_empty() {
            return Err(invalid("deploy.placeholder_program_id", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agbero").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AgberoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ledger.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.deploy.network, "devnet");
    }

    #[test]
    fn zero_airdrop_is_rejected() {
        let mut config = AgberoConfig::default();
        config.deploy.airdrop_sol = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "deploy.airdrop_sol"));
    }

    #[test]
    fn blank_rpc_url_is_rejected() {
        let mut config = AgberoConfig::default();
        config.ledger.rpc_url = "  ".into();
        assert!(config.validate().is_err());
    }
}
