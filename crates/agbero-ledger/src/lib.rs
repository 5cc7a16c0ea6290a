//! # agbero-ledger
//!
//! Everything that touches the Solana ledger:
//! - Loading the process signing key from a Solana CLI keypair file
//! - Building a single-instruction Memo program transaction
//! - The [`MemoSubmitter`] seam and its RPC-backed implementation
//! - Read-only queries for program state and recent memos ([`LedgerReader`])
//!
//! This crate isolates the Solana SDK from the rest of the workspace.

mod error;
pub mod keypair;
pub mod reader;
pub mod submitter;
pub mod transaction;

pub use error::LedgerError;
pub use keypair::{keypair_from_bytes, load_keypair, signer_pubkey};
pub use reader::{LedgerReader, ProgramInfo, SignatureActivity, parse_address, split_rpc_memos};
pub use submitter::{MemoSubmitter, OfflineSubmitter, SolanaMemoSubmitter};
pub use transaction::{MEMO_PROGRAM_ID, memo_instruction, memo_transaction};
