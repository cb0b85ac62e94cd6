use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use wp_utils::serde::{deserialize_duration, serialize_duration};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletStoreConfig {
    /// Where the file host keeps the wallet state document.
    pub state_path: PathBuf,
    /// Accepted transactions older than this are pruned.
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub transaction_retention: Duration,
    /// Default look-back window when listing transactions.
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub list_window: Duration,
}

impl Default for WalletStoreConfig {
    fn default() -> Self {
        Self { state_path: PathBuf::from("wallet-state.json"), transaction_retention: 30 * DAY, list_window: 10 * DAY }
    }
}

impl WalletStoreConfig {
    /// Transactions accepted before this instant (in milliseconds) are due for pruning.
    pub fn retention_cutoff_millis(&self, now_millis: u64) -> u64 {
        now_millis.saturating_sub(duration_millis(self.transaction_retention))
    }

    pub fn list_window_start_millis(&self, now_millis: u64) -> u64 {
        now_millis.saturating_sub(duration_millis(self.list_window))
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
