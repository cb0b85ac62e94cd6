use std::sync::{Arc, OnceLock};
use tokio::sync::{Mutex, MutexGuard};

const GLOBAL_LOCK_NAME: &str = "wallet-state";

/// Mutual exclusion over one wallet state document.
///
/// Every write path (upserts, pruning, removals) holds this lock from the moment it reads the
/// document until its write-back, or its decision not to write, has completed. One document must
/// be guarded by exactly one lock: two independent instances give no exclusion between each other.
/// Production code shares [`StateLock::global`].
///
/// The lock has no timeout. If the host hangs, writers queue behind it; put deadlines on host calls
/// rather than on the lock, so it is never released while a write-back is still in flight.
#[derive(Debug)]
pub struct StateLock {
    name: String,
    inner: Mutex<()>,
}

/// Exclusive access to the document, released on drop.
#[derive(Debug)]
pub struct StateLockGuard<'a> {
    name: &'a str,
    _guard: MutexGuard<'a, ()>,
}

impl StateLock {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), inner: Mutex::new(()) }
    }

    /// The process-wide lock guarding the host's wallet state.
    pub fn global() -> Arc<StateLock> {
        static GLOBAL: OnceLock<Arc<StateLock>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(StateLock::new(GLOBAL_LOCK_NAME))))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waits until the lock is free. Waiters are served in FIFO order.
    pub async fn acquire(&self) -> StateLockGuard<'_> {
        let guard = self.inner.lock().await;
        tracing::trace!(lock = %self.name, "State lock acquired");
        StateLockGuard { name: &self.name, _guard: guard }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.try_lock().is_err()
    }
}

impl Drop for StateLockGuard<'_> {
    fn drop(&mut self) {
        tracing::trace!(lock = %self.name, "State lock released");
    }
}
