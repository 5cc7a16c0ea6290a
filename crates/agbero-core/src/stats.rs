//! Logger counters snapshot.

use serde::{Deserialize, Serialize};

/// Read-only view of an activity logger's in-memory counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Number of `log` calls made by this process, failed submissions included.
    pub total_activities: u64,
    /// Number of build-cycle events logged.
    pub build_cycles: u64,
    pub agent: String,
    /// Base58 public key of the signing key.
    pub validator: String,
    /// RPC endpoint the logger submits to.
    pub network: String,
}
