//! Wallet state store.
//!
//! The wallet persists all of its accounts, networks, tokens and transactions as one document owned
//! by an external [`StateHost`]. Several tasks (account derivation, network switching, token
//! registration, transaction polling) read-modify-write that document concurrently, and the host's
//! `get`/`update` pair is not atomic. This crate mediates every write:
//!
//! - [`upsert`](upsert::upsert) and [`upsert_many`](upsert::upsert_many) insert or merge records by
//!   natural key, skipping the write-back when nothing changed.
//! - [`prune_accepted_before`](remove::prune_accepted_before) implements transaction retention.
//! - All of them serialize through a single [`StateLock`] per document, so no write is lost to a
//!   concurrent stale read.
//!
//! Reads go through [`locate`] and the [`filter`] pipeline and do not take the lock.
//! [`WalletStore`] bundles a host with its lock and exposes the whole API.

pub mod accessors;
pub mod config;
pub mod error;
pub mod filter;
pub mod host;
pub mod locate;
pub mod lock;
pub mod remove;
pub mod upsert;

mod store;
mod tests;

pub use config::WalletStoreConfig;
pub use error::{WalletStoreError, WalletStoreResult};
pub use filter::{Selection, TransactionFilter, TransactionQuery};
#[cfg(any(test, feature = "testing"))]
pub use host::InMemoryHost;
pub use host::{HostError, JsonFileHost, StateHost};
pub use lock::{StateLock, StateLockGuard};
pub use store::WalletStore;
pub use upsert::UpsertOutcome;
