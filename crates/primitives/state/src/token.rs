use serde::{Deserialize, Serialize};

use crate::{felt_eq, EntityKind, StateEntity, WalletState};

/// A fungible token registration, keyed by `(address, chain_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub chain_id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl StateEntity for Token {
    const KIND: EntityKind = EntityKind::Token;

    fn collection(state: &WalletState) -> &[Self] {
        state.tokens.as_deref().unwrap_or_default()
    }

    fn collection_mut(state: &mut WalletState) -> &mut Option<Vec<Self>> {
        &mut state.tokens
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    fn same_key(&self, other: &Self) -> bool {
        felt_eq(&self.address, &other.address) && felt_eq(&self.chain_id, &other.chain_id)
    }

    fn merge_from(&mut self, incoming: &Self) {
        self.name.clone_from(&incoming.name);
        self.symbol.clone_from(&incoming.symbol);
        self.decimals = incoming.decimals;
    }

    fn log_key(&self) -> String {
        format!("{}@{}", self.symbol, self.chain_id)
    }
}
