use std::str::FromStr;

use agbero_core::Memo;
use agbero_ledger::{SignatureActivity, parse_address, signer_pubkey};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActivityArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ActivityEntry {
    #[serde(flatten)]
    transaction: SignatureActivity,
    /// Memos that parse as Agbero commitments.
    agbero: Vec<Memo>,
}

#[derive(Debug, Serialize)]
struct ActivityResponse {
    address: String,
    transactions: Vec<ActivityEntry>,
}

impl From<SignatureActivity> for ActivityEntry {
    fn from(transaction: SignatureActivity) -> Self {
        let agbero = transaction
            .memos
            .iter()
            .filter_map(|memo| Memo::from_str(memo).ok())
            .collect();
        Self { transaction, agbero }
    }
}

/// Handle `agbero activity`.
pub async fn handle(args: &ActivityArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let address = match &args.address {
        Some(address) => parse_address(address)?,
        None => signer_pubkey(&ctx.config.ledger.resolved_keypair_path())
            .context("no --address given and the signer keypair could not be read")?,
    };
    let reader = ctx.reader()?;

    let progress = Progress::spinner(&format!("Listing transactions of {address}"));
    let transactions = match reader.recent_activity(&address, usize::from(args.limit)).await {
        Ok(transactions) => {
            progress.finish_ok(&format!("{} transactions", transactions.len()));
            transactions
        }
        Err(error) => {
            progress.finish_err("Listing failed");
            return Err(error).with_context(|| format!("failed to query {}", reader.endpoint()));
        }
    };

    let response = ActivityResponse {
        address: address.to_string(),
        transactions: transactions.into_iter().map(ActivityEntry::from).collect(),
    };
    output(&response, flags.format)
}
