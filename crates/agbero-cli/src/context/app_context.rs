use std::path::PathBuf;

use agbero_activity::ActivityLogger;
use agbero_config::AgberoConfig;
use agbero_ledger::{LedgerError, LedgerReader, OfflineSubmitter, SolanaMemoSubmitter};

use super::LedgerSubmitter;

/// Shared application state resolved once at startup.
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: AgberoConfig,
    /// Skip the network and hand out `local-` identifiers.
    pub offline: bool,
}

impl AppContext {
    #[must_use]
    pub const fn new(project_root: PathBuf, config: AgberoConfig, offline: bool) -> Self {
        Self {
            project_root,
            config,
            offline,
        }
    }

    /// Construct the activity logger for this run.
    ///
    /// Online mode needs a readable keypair; offline mode never fails.
    pub fn logger(&self) -> Result<ActivityLogger<LedgerSubmitter>, LedgerError> {
        let submitter = if self.offline {
            LedgerSubmitter::Offline(OfflineSubmitter::from_config(&self.config.ledger))
        } else {
            LedgerSubmitter::Solana(SolanaMemoSubmitter::from_config(&self.config.ledger)?)
        };
        tracing::debug!(offline = self.offline, rpc_url = %self.config.ledger.rpc_url, "activity logger ready");
        Ok(ActivityLogger::new(submitter))
    }

    /// Read-only ledger client for `program` and `activity`.
    pub fn reader(&self) -> anyhow::Result<LedgerReader> {
        if self.offline {
            anyhow::bail!("reading the ledger needs the network; drop --offline");
        }
        Ok(LedgerReader::from_config(&self.config.ledger))
    }
}
