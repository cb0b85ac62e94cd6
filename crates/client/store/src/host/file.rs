use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use wp_state::WalletState;

use super::{HostError, StateHost};

/// Persists the wallet state as a pretty-printed JSON file.
///
/// A missing or blank file reads as an empty document. Writes go to a sibling `.tmp` file which is
/// then renamed over the target, so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileHost {
    path: PathBuf,
}

impl JsonFileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StateHost for JsonFileHost {
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    async fn get(&self) -> Result<WalletState, HostError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("No wallet state file yet, starting from an empty document");
                return Ok(WalletState::default());
            }
            Err(err) => return Err(err.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(WalletState::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    async fn update(&self, state: &WalletState) -> Result<(), HostError> {
        let bytes = serde_json::to_vec_pretty(state)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::trace!("Wallet state written");
        Ok(())
    }
}
