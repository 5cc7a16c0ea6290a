//! # agbero-core
//!
//! Core types shared by every Agbero crate:
//! - The activity record and its canonical serialization
//! - SHA-256 hash prefixes used as on-chain commitments
//! - The `AGBERO:<action>:<hash>:<timestamp>` memo format
//! - The logger stats snapshot
//! - Cross-cutting error types

pub mod canonical;
pub mod errors;
pub mod memo;
pub mod record;
pub mod stats;

pub use errors::CoreError;
pub use memo::Memo;
pub use record::{ActivityData, ActivityRecord};
pub use stats::ActivityStats;

/// Fixed agent identifier stamped on every record.
pub const AGENT: &str = "agbero";

/// Namespace prefix of every published memo.
pub const MEMO_NAMESPACE: &str = "AGBERO";

/// Number of hex characters of the digest that are published.
pub const HASH_PREFIX_LEN: usize = 16;

/// Prefix of the identifier returned when a memo could not be published.
pub const LOCAL_ID_PREFIX: &str = "local-";
