use agbero_ledger::{LedgerError, MemoSubmitter, OfflineSubmitter, SolanaMemoSubmitter};

/// The submitter chosen at startup: live RPC, or offline with `--offline`.
pub enum LedgerSubmitter {
    Solana(SolanaMemoSubmitter),
    Offline(OfflineSubmitter),
}

impl MemoSubmitter for LedgerSubmitter {
    fn signer(&self) -> String {
        match self {
            Self::Solana(inner) => inner.signer(),
            Self::Offline(inner) => inner.signer(),
        }
    }

    fn endpoint(&self) -> &str {
        match self {
            Self::Solana(inner) => inner.endpoint(),
            Self::Offline(inner) => inner.endpoint(),
        }
    }

    async fn submit_memo(&self, memo: &str) -> Result<String, LedgerError> {
        match self {
            Self::Solana(inner) => inner.submit_memo(memo).await,
            Self::Offline(inner) => inner.submit_memo(memo).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LedgerSubmitter;
    use agbero_ledger::{LedgerError, MemoSubmitter, OfflineSubmitter};

    #[tokio::test]
    async fn offline_variant_delegates() {
        let submitter = LedgerSubmitter::Offline(OfflineSubmitter::new(
            "Validator1111",
            "http://localhost:8899",
        ));

        assert_eq!(submitter.signer(), "Validator1111");
        assert_eq!(submitter.endpoint(), "http://localhost:8899");
        assert!(matches!(
            submitter.submit_memo("AGBERO:x").await,
            Err(LedgerError::Offline)
        ));
    }
}
