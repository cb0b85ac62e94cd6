use std::sync::Arc;
use wp_state::{Account, Network, Token, Transaction, WalletState};

use crate::accessors::{self, load_state};
use crate::config::WalletStoreConfig;
use crate::error::WalletStoreResult;
use crate::filter::TransactionQuery;
use crate::host::StateHost;
use crate::locate;
use crate::lock::StateLock;
use crate::remove;
use crate::upsert::{self, UpsertOutcome};

/// Wallet state store bound to one host and the lock guarding its document.
///
/// Write methods accept an optional snapshot: when the caller already holds the document, no extra
/// `get` is issued and the snapshot is replaced with the written state on success.
pub struct WalletStore<H: ?Sized> {
    lock: Arc<StateLock>,
    host: Arc<H>,
}

impl<H: ?Sized> Clone for WalletStore<H> {
    fn clone(&self) -> Self {
        Self { lock: Arc::clone(&self.lock), host: Arc::clone(&self.host) }
    }
}

impl<H: StateHost + ?Sized> WalletStore<H> {
    /// Store over `host` guarded by the process-wide [`StateLock::global`].
    pub fn new(host: Arc<H>) -> Self {
        Self::with_lock(host, StateLock::global())
    }

    pub fn with_lock(host: Arc<H>, lock: Arc<StateLock>) -> Self {
        Self { lock, host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn lock(&self) -> &StateLock {
        &self.lock
    }

    pub async fn upsert_account(
        &self,
        account: &Account,
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<UpsertOutcome> {
        upsert::upsert(&*self.host, &self.lock, account, snapshot).await
    }

    pub async fn upsert_network(
        &self,
        network: &Network,
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<UpsertOutcome> {
        upsert::upsert(&*self.host, &self.lock, network, snapshot).await
    }

    pub async fn upsert_networks(
        &self,
        networks: &[Network],
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<Vec<UpsertOutcome>> {
        upsert::upsert_many(&*self.host, &self.lock, networks, snapshot).await
    }

    pub async fn upsert_token(
        &self,
        token: &Token,
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<UpsertOutcome> {
        upsert::upsert(&*self.host, &self.lock, token, snapshot).await
    }

    pub async fn upsert_tokens(
        &self,
        tokens: &[Token],
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<Vec<UpsertOutcome>> {
        upsert::upsert_many(&*self.host, &self.lock, tokens, snapshot).await
    }

    pub async fn upsert_transaction(
        &self,
        transaction: &Transaction,
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<UpsertOutcome> {
        upsert::upsert(&*self.host, &self.lock, transaction, snapshot).await
    }

    pub async fn upsert_transactions(
        &self,
        transactions: &[Transaction],
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<Vec<UpsertOutcome>> {
        upsert::upsert_many(&*self.host, &self.lock, transactions, snapshot).await
    }

    pub async fn prune_accepted_before(
        &self,
        cutoff_millis: u64,
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<usize> {
        remove::prune_accepted_before(&*self.host, &self.lock, cutoff_millis, snapshot).await
    }

    /// Prunes accepted transactions older than the configured retention, counted back from `now_millis`.
    pub async fn prune_expired(&self, config: &WalletStoreConfig, now_millis: u64) -> WalletStoreResult<usize> {
        self.prune_accepted_before(config.retention_cutoff_millis(now_millis), None).await
    }

    pub async fn remove_network(
        &self,
        network: &Network,
        snapshot: Option<&mut WalletState>,
    ) -> WalletStoreResult<bool> {
        remove::remove_network(&*self.host, &self.lock, network, snapshot).await
    }

    pub async fn get_account(
        &self,
        address: &str,
        chain_id: &str,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Option<Account>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_account(&state, address, chain_id).cloned())
    }

    /// Accounts of a chain ordered by derivation index.
    pub async fn get_accounts(
        &self,
        chain_id: &str,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Vec<Account>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_accounts(&state, chain_id).into_iter().cloned().collect())
    }

    pub async fn get_network(
        &self,
        chain_id: &str,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Option<Network>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_network(&state, chain_id).cloned())
    }

    pub async fn get_networks(&self, snapshot: Option<&WalletState>) -> WalletStoreResult<Vec<Network>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_networks(&state).to_vec())
    }

    /// Like [`Self::get_network`], but a missing network is an error.
    pub async fn current_network(&self, chain_id: &str, snapshot: Option<&WalletState>) -> WalletStoreResult<Network> {
        let state = load_state(&*self.host, snapshot).await?;
        accessors::current_network(&state, chain_id).cloned()
    }

    pub async fn get_token(
        &self,
        address: &str,
        chain_id: &str,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Option<Token>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_token(&state, address, chain_id).cloned())
    }

    pub async fn get_tokens(&self, chain_id: &str, snapshot: Option<&WalletState>) -> WalletStoreResult<Vec<Token>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_tokens(&state, chain_id).into_iter().cloned().collect())
    }

    pub async fn get_transaction(
        &self,
        txn_hash: &str,
        chain_id: &str,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Option<Transaction>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_transaction(&state, txn_hash, chain_id).cloned())
    }

    pub async fn get_transactions(
        &self,
        chain_id: &str,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Vec<Transaction>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(locate::find_transactions(&state, chain_id).into_iter().cloned().collect())
    }

    pub async fn list_transactions(
        &self,
        query: &TransactionQuery,
        snapshot: Option<&WalletState>,
    ) -> WalletStoreResult<Vec<Transaction>> {
        let state = load_state(&*self.host, snapshot).await?;
        Ok(accessors::list_transactions(&state, query))
    }
}
