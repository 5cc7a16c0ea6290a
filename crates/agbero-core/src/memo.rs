//! The on-chain memo: `AGBERO:<action>:<hash-prefix>:<timestamp>`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::{HASH_PREFIX_LEN, MEMO_NAMESPACE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub action: String,
    pub hash_prefix: String,
    pub timestamp: String,
}

impl fmt::Display for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{MEMO_NAMESPACE}:{}:{}:{}",
            self.action, self.hash_prefix, self.timestamp
        )
    }
}

impl FromStr for Memo {
    type Err = CoreError;

    /// Parse a published memo.
    ///
    /// Timestamps contain colons and actions may too, so the hash prefix is
    /// located as the first `:<16 hex>:` group after a non-empty action.
    fn from_str(memo: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidMemo {
            memo: memo.to_string(),
            reason: reason.to_string(),
        };

        let rest = memo
            .strip_prefix(MEMO_NAMESPACE)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| invalid("missing AGBERO namespace"))?;

        let (action, hash_prefix, timestamp) = rest
            .match_indices(':')
            .filter(|(idx, _)| *idx > 0)
            .find_map(|(idx, _)| {
                let tail = &rest[idx + 1..];
                let hash = tail.get(..HASH_PREFIX_LEN)?;
                let after = tail.get(HASH_PREFIX_LEN..)?.strip_prefix(':')?;
                is_hex_prefix(hash).then_some((&rest[..idx], hash, after))
            })
            .ok_or_else(|| invalid("no 16-character hex hash segment"))?;

        if !is_timestamp(timestamp) {
            return Err(invalid("timestamp is not ISO 8601"));
        }

        Ok(Self {
            action: action.to_string(),
            hash_prefix: hash_prefix.to_string(),
            timestamp: timestamp.to_string(),
        })
    }
}

/// Naive `isoformat()` output, or RFC 3339 with an offset.
fn is_timestamp(value: &str) -> bool {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

fn is_hex_prefix(value: &str) -> bool {
    value.len() == HASH_PREFIX_LEN && value.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TS: &str = "2026-02-08T12:00:00.250000";

    #[test]
    fn display_uses_namespace_and_colons() {
        let memo = Memo {
            action: "bond_created".into(),
            hash_prefix: "0123456789abcdef".into(),
            timestamp: TS.into(),
        };
        assert_eq!(
            memo.to_string(),
            "AGBERO:bond_created:0123456789abcdef:2026-02-08T12:00:00.250000"
        );
    }

    #[test]
    fn parse_inverts_display() {
        let text = format!("AGBERO:deployment:fedcba9876543210:{TS}");
        let memo: Memo = text.parse().unwrap();
        assert_eq!(memo.action, "deployment");
        assert_eq!(memo.hash_prefix, "fedcba9876543210");
        assert_eq!(memo.timestamp, TS);
        assert_eq!(memo.to_string(), text);
    }

    #[test]
    fn parse_keeps_colons_inside_action() {
        let memo: Memo = format!("AGBERO:ns:step:0000000000000000:{TS}").parse().unwrap();
        assert_eq!(memo.action, "ns:step");
    }

    #[test]
    fn parse_rejects_foreign_namespace() {
        let err = format!("OTHER:x:0000000000000000:{TS}").parse::<Memo>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidMemo { .. }));
    }

    #[test]
    fn parse_rejects_short_hash() {
        assert!(format!("AGBERO:x:abc:{TS}").parse::<Memo>().is_err());
    }

    #[test]
    fn parse_accepts_whole_second_and_offset_timestamps() {
        assert!("AGBERO:x:0000000000000000:2026-02-08T12:00:00".parse::<Memo>().is_ok());
        assert!("AGBERO:x:0000000000000000:2026-02-08T12:00:00Z".parse::<Memo>().is_ok());
    }

    #[test]
    fn parse_rejects_bad_timestamp() {
        assert!("AGBERO:x:0000000000000000:yesterday".parse::<Memo>().is_err());
    }
}
