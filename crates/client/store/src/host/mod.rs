//! The external host owning the persisted wallet state.
//!
//! The host only knows how to hand out the whole document and how to replace it. The pair is not
//! atomic: a `get` followed by an `update` can race with any other writer, which is why every write
//! path in this crate runs under a [`StateLock`](crate::StateLock).

mod file;
#[cfg(any(test, feature = "testing"))]
mod memory;

use async_trait::async_trait;
use wp_state::WalletState;

pub use file::JsonFileHost;
#[cfg(any(test, feature = "testing"))]
pub use memory::InMemoryHost;

#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("State host unavailable: {0}")]
    Unavailable(String),
    #[error("State host I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed wallet state: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Capability to read and replace the persisted wallet state.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait StateHost: Send + Sync {
    /// Returns the current persisted document. A host that was never written returns an empty one.
    async fn get(&self) -> Result<WalletState, HostError>;

    /// Replaces the persisted document. Failures must be surfaced, never swallowed.
    async fn update(&self, state: &WalletState) -> Result<(), HostError>;
}

