use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{felt_eq, EntityKind, StateEntity, WalletState};

/// A network the wallet can talk to.
///
/// Networks flagged with `use_old_accounts` describe a legacy account layout on the same chain. They
/// are kept in the document but never returned as the current network for that chain.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub name: String,
    pub chain_id: String,
    pub base_url: String,
    pub node_url: String,
    pub explorer_url: Option<String>,
    pub account_class_hash: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_old_accounts: bool,
}

impl Network {
    pub fn is_legacy(&self) -> bool {
        self.use_old_accounts
    }
}

impl StateEntity for Network {
    const KIND: EntityKind = EntityKind::Network;

    fn collection(state: &WalletState) -> &[Self] {
        state.networks.as_deref().unwrap_or_default()
    }

    fn collection_mut(state: &mut WalletState) -> &mut Option<Vec<Self>> {
        &mut state.networks
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Chain id and legacy flag: a legacy network upsert never merges into the current network of the
    /// same chain, and the other way around.
    fn same_key(&self, other: &Self) -> bool {
        self.use_old_accounts == other.use_old_accounts && felt_eq(&self.chain_id, &other.chain_id)
    }

    fn merge_from(&mut self, incoming: &Self) {
        self.name.clone_from(&incoming.name);
        self.base_url.clone_from(&incoming.base_url);
        self.node_url.clone_from(&incoming.node_url);
        self.explorer_url.clone_from(&incoming.explorer_url);
        self.account_class_hash.clone_from(&incoming.account_class_hash);
    }

    fn log_key(&self) -> String {
        if self.use_old_accounts {
            format!("{} (legacy)", self.chain_id)
        } else {
            self.chain_id.clone()
        }
    }
}
