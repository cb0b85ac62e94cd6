use crate::host::HostError;

pub type WalletStoreResult<T> = Result<T, WalletStoreError>;

#[derive(thiserror::Error, Debug)]
pub enum WalletStoreError {
    #[error("State host error: {0:#}")]
    Host(#[from] HostError),
    /// No current (non-legacy) network is stored for the chain. Callers use this to trigger network
    /// setup, so it is kept apart from an empty result.
    #[error("Network not configured for chain id {chain_id}")]
    NetworkNotConfigured { chain_id: String },
}
