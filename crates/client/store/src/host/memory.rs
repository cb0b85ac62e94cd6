use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use wp_state::WalletState;

use super::{HostError, StateHost};

/// In-memory host double.
///
/// Counts calls, can fail a number of upcoming calls, and can simulate host latency. The latency is
/// applied after a `get` has read the document and before an `update` writes it, which is the widest
/// possible window for a lost update when callers do not serialize their writes.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    state: Mutex<WalletState>,
    latency: Option<Duration>,
    gets: AtomicUsize,
    updates: AtomicUsize,
    failing_gets: AtomicUsize,
    failing_updates: AtomicUsize,
}

impl InMemoryHost {
    pub fn new(state: WalletState) -> Self {
        Self { state: Mutex::new(state), ..Default::default() }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// The next `n` calls to `get` fail with [`HostError::Unavailable`].
    pub fn fail_next_gets(&self, n: usize) {
        self.failing_gets.store(n, Ordering::SeqCst);
    }

    /// The next `n` calls to `update` fail with [`HostError::Unavailable`].
    pub fn fail_next_updates(&self, n: usize) {
        self.failing_updates.store(n, Ordering::SeqCst);
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// The persisted document, without counting as a `get`.
    pub async fn persisted(&self) -> WalletState {
        self.state.lock().await.clone()
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

fn take_failure(counter: &AtomicUsize) -> bool {
    counter.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_ok()
}

#[async_trait]
impl StateHost for InMemoryHost {
    async fn get(&self) -> Result<WalletState, HostError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.failing_gets) {
            return Err(HostError::Unavailable("get rejected by test host".into()));
        }
        let state = self.state.lock().await.clone();
        self.wait().await;
        Ok(state)
    }

    async fn update(&self, state: &WalletState) -> Result<(), HostError> {
        self.wait().await;
        if take_failure(&self.failing_updates) {
            return Err(HostError::Unavailable("update rejected by test host".into()));
        }
        *self.state.lock().await = state.clone();
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
