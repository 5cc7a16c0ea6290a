use std::str::FromStr;

use agbero_core::{ActivityRecord, Memo};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VerifyArgs;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct Verification {
    matches: bool,
    action: String,
    published_hash: String,
    computed_hash: String,
    timestamp: String,
}

fn verify(record: &ActivityRecord, memo: &Memo) -> Verification {
    Verification {
        matches: record.matches(memo),
        action: record.action.clone(),
        published_hash: memo.hash_prefix.clone(),
        computed_hash: record.hash_prefix(),
        timestamp: record.timestamp.clone(),
    }
}

/// Handle `agbero verify`. A mismatch prints the comparison and exits non-zero.
pub fn handle(args: &VerifyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let memo = Memo::from_str(&args.memo)?;
    let json = std::fs::read_to_string(&args.record)
        .with_context(|| format!("failed to read record '{}'", args.record.display()))?;
    let record = ActivityRecord::from_json(&json)
        .with_context(|| format!("'{}' is not an activity record", args.record.display()))?;

    let verification = verify(&record, &memo);
    output(&verification, flags.format)?;

    if !verification.matches {
        anyhow::bail!("record does not match memo '{memo}'");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use agbero_core::{ActivityData, ActivityRecord, Memo};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::verify;

    fn record() -> ActivityRecord {
        let mut data = ActivityData::new();
        data.insert("bond_id".into(), json!("B1"));
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        ActivityRecord::new("bond_created", data, at, 1)
    }

    #[test]
    fn published_memo_verifies() {
        let record = record();
        let memo = Memo::from_str(&record.memo().to_string()).unwrap();
        let verification = verify(&record, &memo);
        assert!(verification.matches);
        assert_eq!(verification.published_hash, verification.computed_hash);
    }

    #[test]
    fn tampered_record_is_detected() {
        let original = record();
        let memo = original.memo();

        let mut tampered = original;
        tampered.data.insert("bond_id".into(), json!("B2"));
        let verification = verify(&tampered, &memo);
        assert!(!verification.matches);
        assert_ne!(verification.published_hash, verification.computed_hash);
    }
}
