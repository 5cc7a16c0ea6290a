//! The activity record: the transient structure behind every memo.
//!
//! A record is built, canonicalized and hashed once per `log` call. Only
//! the memo derived from it is published; keeping the record itself is up
//! to the caller, which needs it to prove a memo later.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canonical::{canonical_string, sha256_hex};
use crate::errors::CoreError;
use crate::memo::Memo;
use crate::{AGENT, HASH_PREFIX_LEN};

/// Event-specific payload of an activity.
pub type ActivityData = Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    /// Always [`AGENT`] for records produced by this process.
    pub agent: String,

    /// Caller-supplied event name (e.g. `bond_created`).
    pub action: String,

    pub data: ActivityData,

    /// Naive UTC ISO 8601 timestamp, e.g. `2026-02-08T12:00:00.250000`.
    pub timestamp: String,

    /// Per-process sequence number, starting at 1.
    pub sequence: u64,
}

impl ActivityRecord {
    #[must_use]
    pub fn new(action: &str, data: ActivityData, at: DateTime<Utc>, sequence: u64) -> Self {
        Self {
            agent: AGENT.to_string(),
            action: action.to_string(),
            data,
            timestamp: format_timestamp(at),
            sequence,
        }
    }

    /// Parse a record previously written out as JSON.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Canonical JSON of the whole record, as `json.dumps(..., sort_keys=True)` prints it.
    #[must_use]
    pub fn canonical_json(&self) -> String {
        let value = Value::Object(Map::from_iter([
            ("agent".to_string(), Value::from(self.agent.as_str())),
            ("action".to_string(), Value::from(self.action.as_str())),
            ("data".to_string(), Value::Object(self.data.clone())),
            ("timestamp".to_string(), Value::from(self.timestamp.as_str())),
            ("sequence".to_string(), Value::from(self.sequence)),
        ]));
        canonical_string(&value)
    }

    /// Full hex SHA-256 digest of [`Self::canonical_json`].
    #[must_use]
    pub fn digest(&self) -> String {
        sha256_hex(self.canonical_json().as_bytes())
    }

    /// The first [`HASH_PREFIX_LEN`] hex characters of the digest.
    #[must_use]
    pub fn hash_prefix(&self) -> String {
        let mut digest = self.digest();
        digest.truncate(HASH_PREFIX_LEN);
        digest
    }

    #[must_use]
    pub fn memo(&self) -> Memo {
        Memo {
            action: self.action.clone(),
            hash_prefix: self.hash_prefix(),
            timestamp: self.timestamp.clone(),
        }
    }

    /// Whether `memo` is the commitment published for this record.
    #[must_use]
    pub fn matches(&self, memo: &Memo) -> bool {
        memo.action == self.action
            && memo.timestamp == self.timestamp
            && memo.hash_prefix == self.hash_prefix()
    }
}

/// Format a timestamp the way records carry it: naive UTC, microseconds
/// only when non-zero (Python's `datetime.isoformat`).
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let naive = at.naive_utc();
    if naive.nanosecond() / 1_000 == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Unwrap a JSON value into activity data. Only objects are accepted.
pub fn data_from_value(value: Value) -> Result<ActivityData, CoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::DataNotObject(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap()
    }

    fn data(value: Value) -> ActivityData {
        data_from_value(value).unwrap()
    }

    #[test]
    fn timestamp_is_naive_iso8601() {
        let record = ActivityRecord::new("startup", ActivityData::new(), at(), 1);
        assert_eq!(record.timestamp, "2026-02-08T12:00:00");
        assert_eq!(record.agent, AGENT);
    }

    #[test]
    fn timestamp_keeps_microseconds_when_present() {
        let with_micros = at() + chrono::Duration::microseconds(250_000);
        assert_eq!(format_timestamp(with_micros), "2026-02-08T12:00:00.250000");

        let sub_micro = at() + chrono::Duration::nanoseconds(999);
        assert_eq!(format_timestamp(sub_micro), "2026-02-08T12:00:00");
    }

    #[test]
    fn canonical_json_sorts_top_level_and_payload_keys() {
        let record = ActivityRecord::new("startup", data(json!({"z": 1, "a": 2})), at(), 3);
        assert_eq!(
            record.canonical_json(),
            r#"{"action": "startup", "agent": "agbero", "data": {"a": 2, "z": 1}, "sequence": 3, "timestamp": "2026-02-08T12:00:00"}"#
        );
    }

    #[test]
    fn hash_prefix_is_sixteen_lowercase_hex_chars() {
        let record = ActivityRecord::new("startup", ActivityData::new(), at(), 1);
        let prefix = record.hash_prefix();
        assert_eq!(prefix.len(), HASH_PREFIX_LEN);
        assert!(prefix.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert!(record.digest().starts_with(&prefix));
    }

    #[test]
    fn sequence_changes_the_hash() {
        let first = ActivityRecord::new("startup", ActivityData::new(), at(), 1);
        let second = ActivityRecord::new("startup", ActivityData::new(), at(), 2);
        assert_ne!(first.hash_prefix(), second.hash_prefix());
    }

    #[test]
    fn matches_rejects_tampered_payload() {
        let record = ActivityRecord::new("bond_created", data(json!({"bond_id": "B1"})), at(), 1);
        let memo = record.memo();
        assert!(record.matches(&memo));

        let mut tampered = record.clone();
        tampered.data.insert("bond_id".into(), json!("B2"));
        assert!(!tampered.matches(&memo));
    }

    #[test]
    fn non_object_data_is_rejected() {
        let err = data_from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, CoreError::DataNotObject(_)));
    }
}
