use wp_state::{Network, StateEntity, WalletState};

use crate::error::WalletStoreResult;
use crate::host::StateHost;
use crate::lock::StateLock;
use crate::upsert::load_for_write;

/// Drops accepted transactions (on L2 or L1) older than `cutoff_millis`. Transactions that are not
/// accepted yet are kept whatever their age.
///
/// The document is always written back, even when nothing was removed. Returns the number of
/// transactions removed.
#[tracing::instrument(skip(host, lock, snapshot))]
pub async fn prune_accepted_before<H: StateHost + ?Sized>(
    host: &H,
    lock: &StateLock,
    cutoff_millis: u64,
    snapshot: Option<&mut WalletState>,
) -> WalletStoreResult<usize> {
    let _guard = lock.acquire().await;

    let mut state = load_for_write(host, snapshot.as_deref()).await?;
    let removed = match state.transactions.as_mut() {
        Some(transactions) => {
            let before = transactions.len();
            transactions.retain(|tx| !tx.is_accepted() || tx.timestamp_millis() >= cutoff_millis);
            before - transactions.len()
        }
        None => 0,
    };

    host.update(&state).await?;
    tracing::info!("🧹 Pruned {removed} accepted transactions");

    if let Some(snapshot) = snapshot {
        *snapshot = state;
    }
    Ok(removed)
}

/// Removes the stored network sharing `network`'s key (its chain, and whether it is the legacy
/// network of that chain). Writes back only when a record was removed.
#[tracing::instrument(skip_all, fields(key = %network.log_key()))]
pub async fn remove_network<H: StateHost + ?Sized>(
    host: &H,
    lock: &StateLock,
    network: &Network,
    snapshot: Option<&mut WalletState>,
) -> WalletStoreResult<bool> {
    let _guard = lock.acquire().await;

    let mut state = load_for_write(host, snapshot.as_deref()).await?;
    let removed = match Network::collection_mut(&mut state) {
        Some(networks) => {
            let before = networks.len();
            networks.retain(|stored| !stored.same_key(network));
            before != networks.len()
        }
        None => false,
    };

    if removed {
        host.update(&state).await?;
        tracing::info!("Network {} removed", network.log_key());
    } else {
        tracing::debug!("No network stored for {}, nothing to remove", network.log_key());
    }

    if let Some(snapshot) = snapshot {
        *snapshot = state;
    }
    Ok(removed)
}
