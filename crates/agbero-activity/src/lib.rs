//! # agbero-activity
//!
//! The activity logger. Each call builds an [`agbero_core::ActivityRecord`],
//! hashes its canonical form, and publishes the resulting memo through a
//! [`agbero_ledger::MemoSubmitter`]. Submission is best-effort: failures turn
//! into `local-<hash>` identifiers and never reach the caller as errors.

mod events;
mod logger;

pub use logger::{ActivityLogger, Clock};
