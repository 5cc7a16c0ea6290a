//! Submitter construction and failure paths that need no live cluster.

use std::fs;

use agbero_config::LedgerConfig;
use agbero_ledger::{
    LedgerError, LedgerReader, MEMO_PROGRAM_ID, MemoSubmitter, OfflineSubmitter,
    SolanaMemoSubmitter,
};
use solana_sdk::signature::{Keypair, Signer};

fn config_with_key(dir: &std::path::Path, rpc_url: &str) -> (LedgerConfig, Keypair) {
    let keypair = Keypair::new();
    let path = dir.join("id.json");
    fs::write(
        &path,
        serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap(),
    )
    .unwrap();
    let config = LedgerConfig {
        rpc_url: rpc_url.to_string(),
        keypair_path: path.to_string_lossy().to_string(),
    };
    (config, keypair)
}

#[test]
fn solana_submitter_reports_identity_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let (config, keypair) = config_with_key(dir.path(), "http://127.0.0.1:1");

    let submitter = SolanaMemoSubmitter::from_config(&config).unwrap();
    assert_eq!(submitter.signer(), keypair.pubkey().to_string());
    assert_eq!(submitter.endpoint(), "http://127.0.0.1:1");
}

#[test]
fn solana_submitter_requires_readable_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = LedgerConfig {
        rpc_url: "http://127.0.0.1:1".into(),
        keypair_path: dir.path().join("missing.json").to_string_lossy().to_string(),
    };
    assert!(matches!(
        SolanaMemoSubmitter::from_config(&config),
        Err(LedgerError::KeyFile { .. })
    ));
}

#[tokio::test]
async fn unreachable_rpc_surfaces_as_rpc_error() {
    let dir = tempfile::tempdir().unwrap();
    // Port 1 on loopback refuses connections.
    let (config, _) = config_with_key(dir.path(), "http://127.0.0.1:1");
    let submitter = SolanaMemoSubmitter::from_config(&config).unwrap();

    let err = submitter.submit_memo("AGBERO:test").await.unwrap_err();
    assert!(matches!(err, LedgerError::Rpc(_)));
}

#[tokio::test]
async fn offline_submitter_always_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (config, keypair) = config_with_key(dir.path(), "http://127.0.0.1:1");
    let submitter = OfflineSubmitter::from_config(&config);

    assert_eq!(submitter.signer(), keypair.pubkey().to_string());
    assert!(matches!(
        submitter.submit_memo("AGBERO:test").await,
        Err(LedgerError::Offline)
    ));
}

#[test]
fn offline_submitter_without_key_uses_placeholder_identity() {
    let config = LedgerConfig {
        rpc_url: "http://127.0.0.1:1".into(),
        keypair_path: "/nonexistent/agbero/id.json".into(),
    };
    assert_eq!(OfflineSubmitter::from_config(&config).signer(), "unknown");
}

#[tokio::test]
async fn reader_surfaces_unreachable_rpc() {
    let reader = LedgerReader::new("http://127.0.0.1:1");
    assert_eq!(reader.endpoint(), "http://127.0.0.1:1");

    assert!(matches!(
        reader.program_info(&MEMO_PROGRAM_ID).await,
        Err(LedgerError::Rpc(_))
    ));
    assert!(matches!(
        reader.recent_activity(&MEMO_PROGRAM_ID, 5).await,
        Err(LedgerError::Rpc(_))
    ));
}
