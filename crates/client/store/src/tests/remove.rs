use assert_matches::assert_matches;
use rstest::{fixture, rstest};
use wp_state::{FinalityStatus, WalletState};

use super::{network, transaction};
use crate::error::WalletStoreError;
use crate::host::InMemoryHost;
use crate::locate::{find_network, find_networks};
use crate::lock::StateLock;
use crate::remove::{prune_accepted_before, remove_network};

#[fixture]
fn history() -> WalletState {
    WalletState {
        transactions: Some(vec![
            transaction("0x1", "0x1", FinalityStatus::AcceptedOnL2, 50),
            transaction("0x2", "0x1", FinalityStatus::AcceptedOnL2, 150),
            transaction("0x3", "0x1", FinalityStatus::Pending, 10),
            transaction("0x4", "0x1", FinalityStatus::AcceptedOnL1, 99),
            transaction("0x5", "0x1", FinalityStatus::AcceptedOnL1, 100),
            transaction("0x6", "0x1", FinalityStatus::Received, 1),
        ]),
        ..Default::default()
    }
}

fn hashes(state: &WalletState) -> Vec<&str> {
    state.transactions.as_deref().unwrap_or_default().iter().map(|tx| tx.txn_hash.as_str()).collect()
}

#[rstest]
#[tokio::test]
async fn test_prune_boundary(history: WalletState) {
    let host = InMemoryHost::new(history);
    let lock = StateLock::new("test");

    let removed = prune_accepted_before(&host, &lock, 100_000, None).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(hashes(&host.persisted().await), vec!["0x2", "0x3", "0x5", "0x6"]);
}

#[rstest]
#[tokio::test]
async fn test_prune_always_writes_back(history: WalletState) {
    let host = InMemoryHost::new(history.clone());
    let lock = StateLock::new("test");

    assert_eq!(prune_accepted_before(&host, &lock, 0, None).await.unwrap(), 0);
    assert_eq!(host.update_count(), 1);
    assert_eq!(host.persisted().await, history);

    let empty = InMemoryHost::default();
    assert_eq!(prune_accepted_before(&empty, &lock, u64::MAX, None).await.unwrap(), 0);
    assert_eq!(empty.update_count(), 1);
    assert!(empty.persisted().await.transactions.is_none());
}

#[rstest]
#[tokio::test]
async fn test_prune_with_snapshot(history: WalletState) {
    let host = InMemoryHost::default();
    let lock = StateLock::new("test");
    let mut snapshot = history;

    assert_eq!(prune_accepted_before(&host, &lock, u64::MAX, Some(&mut snapshot)).await.unwrap(), 4);
    assert_eq!(host.get_count(), 0);
    assert_eq!(hashes(&snapshot), vec!["0x3", "0x6"]);
    assert_eq!(host.persisted().await, snapshot);
}

#[rstest]
#[tokio::test]
async fn test_prune_failure_releases_lock(history: WalletState) {
    let host = InMemoryHost::new(history.clone());
    host.fail_next_updates(1);
    let lock = StateLock::new("test");

    assert_matches!(prune_accepted_before(&host, &lock, u64::MAX, None).await, Err(WalletStoreError::Host(_)));
    assert!(!lock.is_locked());
    assert_eq!(host.persisted().await, history);
}

#[tokio::test]
async fn test_remove_network() {
    let networks = vec![network("0x1", false), network("0x1", true), network("0x2", false)];
    let host = InMemoryHost::new(WalletState { networks: Some(networks), ..Default::default() });
    let lock = StateLock::new("test");

    assert!(remove_network(&host, &lock, &network("1", false), None).await.unwrap());
    let state = host.persisted().await;
    assert!(find_network(&state, "0x1").is_none());
    assert_eq!(find_networks(&state).len(), 2);
    assert_eq!(host.update_count(), 1);

    // Nothing left to remove: no write-back.
    assert!(!remove_network(&host, &lock, &network("0x1", false), None).await.unwrap());
    assert_eq!(host.update_count(), 1);
}
