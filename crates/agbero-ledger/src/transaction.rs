//! Memo program transactions.
//!
//! The memo instruction lists the signer as its only account, so the Memo
//! program checks the signature and records the UTF-8 payload in the
//! transaction log without touching any state.

use solana_sdk::hash::Hash;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;

/// SPL Memo program v2.
pub const MEMO_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

#[must_use]
pub fn memo_instruction(memo: &str, signer: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        MEMO_PROGRAM_ID,
        memo.as_bytes(),
        vec![AccountMeta::new_readonly(*signer, true)],
    )
}

/// A signed transaction carrying one memo instruction, paid for by `payer`.
#[must_use]
pub fn memo_transaction(memo: &str, payer: &Keypair, recent_blockhash: Hash) -> Transaction {
    let payer_key = payer.pubkey();
    let instruction = memo_instruction(memo, &payer_key);
    Transaction::new_signed_with_payer(&[instruction], Some(&payer_key), &[payer], recent_blockhash)
}
