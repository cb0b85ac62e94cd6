//! Record lookups by natural key.
//!
//! These are linear scans over one collection of the document. Addresses, hashes and chain ids are
//! compared as felts, so the representation used by the caller does not matter.

use itertools::Itertools;
use wp_state::{felt_eq, Account, Network, StateEntity, Token, Transaction, WalletState};

/// Position of the stored record sharing `probe`'s natural key.
pub fn position_of<E: StateEntity>(state: &WalletState, probe: &E) -> Option<usize> {
    E::collection(state).iter().position(|stored| stored.same_key(probe))
}

pub fn find_record<'a, E: StateEntity>(state: &'a WalletState, probe: &E) -> Option<&'a E> {
    position_of(state, probe).map(|i| &E::collection(state)[i])
}

fn on_chain<'a, E: StateEntity>(state: &'a WalletState, chain_id: &'a str) -> impl Iterator<Item = &'a E> + 'a {
    E::collection(state).iter().filter(move |record| felt_eq(record.chain_id(), chain_id))
}

pub fn find_account<'a>(state: &'a WalletState, address: &str, chain_id: &str) -> Option<&'a Account> {
    Account::collection(state)
        .iter()
        .find(|account| felt_eq(&account.address, address) && felt_eq(&account.chain_id, chain_id))
}

/// Accounts of a chain, ordered by derivation index.
pub fn find_accounts<'a>(state: &'a WalletState, chain_id: &'a str) -> Vec<&'a Account> {
    on_chain::<Account>(state, chain_id).sorted_by_key(|account| account.address_index).collect()
}

/// The current network of a chain. Legacy-account networks are never returned.
pub fn find_network<'a>(state: &'a WalletState, chain_id: &str) -> Option<&'a Network> {
    Network::collection(state).iter().find(|network| !network.is_legacy() && felt_eq(&network.chain_id, chain_id))
}

/// Every stored network, legacy ones included.
pub fn find_networks(state: &WalletState) -> &[Network] {
    Network::collection(state)
}

pub fn find_token<'a>(state: &'a WalletState, address: &str, chain_id: &str) -> Option<&'a Token> {
    Token::collection(state).iter().find(|token| felt_eq(&token.address, address) && felt_eq(&token.chain_id, chain_id))
}

pub fn find_tokens<'a>(state: &'a WalletState, chain_id: &'a str) -> Vec<&'a Token> {
    on_chain::<Token>(state, chain_id).collect()
}

pub fn find_transaction<'a>(state: &'a WalletState, txn_hash: &str, chain_id: &str) -> Option<&'a Transaction> {
    Transaction::collection(state).iter().find(|tx| felt_eq(&tx.txn_hash, txn_hash) && felt_eq(&tx.chain_id, chain_id))
}

pub fn find_transactions<'a>(state: &'a WalletState, chain_id: &'a str) -> Vec<&'a Transaction> {
    on_chain::<Transaction>(state, chain_id).collect()
}
