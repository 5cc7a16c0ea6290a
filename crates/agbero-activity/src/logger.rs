use agbero_core::record::data_from_value;
use agbero_core::{ActivityData, ActivityRecord, ActivityStats, AGENT, CoreError, LOCAL_ID_PREFIX};
use agbero_ledger::MemoSubmitter;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Source of record timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Hashes activities and anchors their memos on-chain.
///
/// Counters live in the instance and reset with the process. The logger is
/// constructed once by the caller and passed to whatever needs it.
pub struct ActivityLogger<S> {
    submitter: S,
    clock: Clock,
    activity_count: u64,
    build_cycles: u64,
    last_record: Option<ActivityRecord>,
}

impl<S: MemoSubmitter> ActivityLogger<S> {
    #[must_use]
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            clock: Utc::now,
            activity_count: 0,
            build_cycles: 0,
            last_record: None,
        }
    }

    /// Replace the wall clock, mainly for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub const fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Log one activity.
    ///
    /// Returns the transaction signature, or `local-<hash>` when the memo
    /// could not be published. The sequence number advances either way.
    pub async fn log(&mut self, action: &str, data: ActivityData) -> String {
        self.activity_count += 1;
        let record = ActivityRecord::new(action, data, (self.clock)(), self.activity_count);
        let memo = record.memo();

        let outcome = self.submitter.submit_memo(&memo.to_string()).await;
        let id = match outcome {
            Ok(signature) => {
                tracing::info!(
                    sequence = record.sequence,
                    action,
                    hash = %memo.hash_prefix,
                    tx = %signature,
                    "activity logged"
                );
                signature
            }
            Err(error) => {
                tracing::warn!(
                    sequence = record.sequence,
                    action,
                    hash = %memo.hash_prefix,
                    %error,
                    "failed to log activity on-chain"
                );
                format!("{LOCAL_ID_PREFIX}{}", memo.hash_prefix)
            }
        };
        self.last_record = Some(record);
        id
    }

    /// The most recently logged record, for callers that export it so the
    /// memo can be checked later. Only the memo is ever published.
    #[must_use]
    pub const fn last_record(&self) -> Option<&ActivityRecord> {
        self.last_record.as_ref()
    }

    /// Log an activity whose payload arrives as untyped JSON.
    ///
    /// Fails only when `data` is not an object; nothing is counted then.
    pub async fn log_value(&mut self, action: &str, data: Value) -> Result<String, CoreError> {
        let data = data_from_value(data)?;
        Ok(self.log(action, data).await)
    }

    pub(crate) fn next_build_cycle(&mut self) -> u64 {
        self.build_cycles += 1;
        self.build_cycles
    }

    pub(crate) const fn activity_count(&self) -> u64 {
        self.activity_count
    }

    /// Snapshot of the counters plus signer identity and endpoint.
    #[must_use]
    pub fn stats(&self) -> ActivityStats {
        ActivityStats {
            total_activities: self.activity_count,
            build_cycles: self.build_cycles,
            agent: AGENT.to_string(),
            validator: self.submitter.signer(),
            network: self.submitter.endpoint().to_string(),
        }
    }
}
