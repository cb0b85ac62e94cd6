//! Serialized insert-or-merge of records into the wallet state.
//!
//! Every write runs the same critical section under the [`StateLock`]:
//!
//! 1. Use the caller's snapshot, or fetch the document from the host.
//! 2. Locate the stored record sharing the incoming record's natural key.
//! 3. Insert it if there is none. If there is one, compare both canonically: equal records are a
//!    no-op, otherwise the kind's mutable fields are merged into the stored record.
//! 4. Write the whole document back, unless nothing changed.
//!
//! Work happens on a copy of the document: the caller's snapshot is only replaced once the host
//! accepted the write, so a failed write-back never leaks a half-applied state.

use wp_state::{is_same_record, StateEntity, WalletState};

use crate::error::WalletStoreResult;
use crate::host::StateHost;
use crate::locate::position_of;
use crate::lock::StateLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    /// The stored record already equals the incoming one.
    Unchanged,
}

impl UpsertOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Applies one record to the document, without any locking or I/O.
pub fn apply_upsert<E: StateEntity>(state: &mut WalletState, record: &E) -> UpsertOutcome {
    let position = position_of(state, record);
    let collection = E::collection_mut(state).get_or_insert_with(Vec::new);
    match position {
        None => {
            collection.push(record.clone());
            UpsertOutcome::Inserted
        }
        Some(i) if is_same_record(&collection[i], record) => UpsertOutcome::Unchanged,
        Some(i) => {
            collection[i].merge_from(record);
            UpsertOutcome::Updated
        }
    }
}

pub(crate) async fn load_for_write<H: StateHost + ?Sized>(
    host: &H,
    snapshot: Option<&WalletState>,
) -> WalletStoreResult<WalletState> {
    match snapshot {
        Some(state) => Ok(state.clone()),
        None => Ok(host.get().await?),
    }
}

/// Inserts or merges one record. The write-back is skipped when the stored record already equals
/// `record`.
#[tracing::instrument(skip_all, fields(kind = %E::KIND, key = %record.log_key()))]
pub async fn upsert<E, H>(
    host: &H,
    lock: &StateLock,
    record: &E,
    snapshot: Option<&mut WalletState>,
) -> WalletStoreResult<UpsertOutcome>
where
    E: StateEntity,
    H: StateHost + ?Sized,
{
    let _guard = lock.acquire().await;

    let mut state = load_for_write(host, snapshot.as_deref()).await?;
    let outcome = apply_upsert(&mut state, record);

    if outcome.is_change() {
        host.update(&state).await?;
        tracing::debug!("{} {:?} and state updated", E::KIND, outcome);
    } else {
        tracing::debug!("Same {} already stored, skipping state update", E::KIND);
    }

    if let Some(snapshot) = snapshot {
        *snapshot = state;
    }
    Ok(outcome)
}

/// Inserts or merges a batch of records against a single fetch of the document.
///
/// The document is written back exactly once per call, even when every record turned out
/// unchanged. Callers that care about the distinction can inspect the returned outcomes.
#[tracing::instrument(skip_all, fields(kind = %E::KIND, count = records.len()))]
pub async fn upsert_many<E, H>(
    host: &H,
    lock: &StateLock,
    records: &[E],
    snapshot: Option<&mut WalletState>,
) -> WalletStoreResult<Vec<UpsertOutcome>>
where
    E: StateEntity,
    H: StateHost + ?Sized,
{
    let _guard = lock.acquire().await;

    let mut state = load_for_write(host, snapshot.as_deref()).await?;
    let outcomes = records.iter().map(|record| apply_upsert(&mut state, record)).collect::<Vec<_>>();

    host.update(&state).await?;
    tracing::debug!(
        inserted = outcomes.iter().filter(|o| **o == UpsertOutcome::Inserted).count(),
        updated = outcomes.iter().filter(|o| **o == UpsertOutcome::Updated).count(),
        "{} batch stored",
        E::KIND
    );

    if let Some(snapshot) = snapshot {
        *snapshot = state;
    }
    Ok(outcomes)
}
