pub mod activity;
pub mod demo;
pub mod deploy;
pub mod dispatch;
pub mod event;
pub mod log;
pub mod program;
pub mod verify;

pub use dispatch::dispatch;

use agbero_activity::ActivityLogger;
use agbero_core::ActivityRecord;
use agbero_ledger::MemoSubmitter;
use anyhow::Context;
use serde::Serialize;

/// What `log`, `event` and `demo` print for each logged activity.
///
/// The full record is included so it can be saved and later checked
/// against the published memo with `agbero verify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedActivity {
    pub action: String,
    /// Transaction signature, or `local-<hash>` when submission failed.
    pub id: String,
    pub memo: String,
    pub record: ActivityRecord,
}

impl LoggedActivity {
    /// Pair `id` with the record the logger produced for it.
    pub fn latest<S: MemoSubmitter>(logger: &ActivityLogger<S>, id: String) -> anyhow::Result<Self> {
        let record = logger
            .last_record()
            .context("logger returned an id without a record")?
            .clone();
        Ok(Self {
            action: record.action.clone(),
            id,
            memo: record.memo().to_string(),
            record,
        })
    }
}
