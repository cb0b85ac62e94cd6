//! Read side of the store.
//!
//! Accessors never take the [`StateLock`](crate::StateLock). Given a snapshot they answer from it,
//! which is a point-in-time view: a write running concurrently is not reflected. Without one they
//! fetch the document from the host.

use std::borrow::Cow;
use wp_state::{Network, Transaction, WalletState};

use crate::error::{WalletStoreError, WalletStoreResult};
use crate::filter::{filter_transactions, TransactionQuery};
use crate::host::StateHost;
use crate::locate::find_network;

pub async fn load_state<'a, H: StateHost + ?Sized>(
    host: &H,
    snapshot: Option<&'a WalletState>,
) -> WalletStoreResult<Cow<'a, WalletState>> {
    match snapshot {
        Some(state) => Ok(Cow::Borrowed(state)),
        None => Ok(Cow::Owned(host.get().await?)),
    }
}

/// The current network of a chain, or [`WalletStoreError::NetworkNotConfigured`].
pub fn current_network<'a>(state: &'a WalletState, chain_id: &str) -> WalletStoreResult<&'a Network> {
    find_network(state, chain_id).ok_or_else(|| WalletStoreError::NetworkNotConfigured { chain_id: chain_id.into() })
}

/// Transactions matching `query`, in stored order.
pub fn list_transactions(state: &WalletState, query: &TransactionQuery) -> Vec<Transaction> {
    let filters = query.filters();
    let transactions = state.transactions.as_deref().unwrap_or_default();
    filter_transactions(transactions, &filters).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockStateHost;
    use crate::tests::{network, transaction};
    use assert_matches::assert_matches;
    use wp_state::FinalityStatus;

    #[test]
    fn test_current_network_not_configured() {
        let state = WalletState { networks: Some(vec![network("0x1", true)]), ..Default::default() };
        assert_matches!(
            current_network(&state, "0x1"),
            Err(WalletStoreError::NetworkNotConfigured { chain_id }) if chain_id == "0x1"
        );
        assert_matches!(current_network(&WalletState::default(), "0x1"), Err(_));

        let networks = vec![network("0x1", true), network("1", false)];
        let state = WalletState { networks: Some(networks), ..Default::default() };
        assert_eq!(current_network(&state, "0x1").unwrap().chain_id, "1");
    }

    #[test]
    fn test_list_transactions() {
        let state = WalletState {
            transactions: Some(vec![
                transaction("0x1", "0x1", FinalityStatus::AcceptedOnL2, 50),
                transaction("0x2", "0x2", FinalityStatus::AcceptedOnL2, 150),
                transaction("0x3", "0x1", FinalityStatus::Pending, 150),
            ]),
            ..Default::default()
        };
        let listed = list_transactions(&state, &TransactionQuery::new("1").since_millis(100_000));
        assert_eq!(listed, vec![transaction("0x3", "0x1", FinalityStatus::Pending, 150)]);
        assert!(list_transactions(&WalletState::default(), &TransactionQuery::new("1")).is_empty());
    }

    #[tokio::test]
    async fn test_load_state_prefers_snapshot() {
        // A snapshot never reaches the host.
        let host = MockStateHost::new();
        let snapshot = WalletState::default();
        assert_matches!(load_state(&host, Some(&snapshot)).await, Ok(Cow::Borrowed(_)));

        let mut host = MockStateHost::new();
        host.expect_get().times(1).returning(|| Ok(WalletState::default()));
        assert_matches!(load_state(&host, None).await, Ok(Cow::Owned(_)));
    }
}
