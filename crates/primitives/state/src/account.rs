use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{felt_eq, EntityKind, StateEntity, WalletState};

/// A derived wallet account, keyed by `(address, chain_id)`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub chain_id: String,
    pub address_index: u32,
    pub derivation_path: String,
    pub public_key: String,
    pub address_salt: String,
    /// Hash of the transaction deploying this account, once one has been sent.
    pub deploy_txn_hash: Option<String>,
}

impl Account {
    fn has_deploy_txn_hash(&self) -> bool {
        self.deploy_txn_hash.as_deref().is_some_and(|hash| !hash.is_empty())
    }
}

impl StateEntity for Account {
    const KIND: EntityKind = EntityKind::Account;

    fn collection(state: &WalletState) -> &[Self] {
        state.accounts.as_deref().unwrap_or_default()
    }

    fn collection_mut(state: &mut WalletState) -> &mut Option<Vec<Self>> {
        &mut state.accounts
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    fn same_key(&self, other: &Self) -> bool {
        felt_eq(&self.address, &other.address) && felt_eq(&self.chain_id, &other.chain_id)
    }

    fn merge_from(&mut self, incoming: &Self) {
        self.address_salt.clone_from(&incoming.address_salt);
        self.address_index = incoming.address_index;
        self.derivation_path.clone_from(&incoming.derivation_path);
        self.public_key.clone_from(&incoming.public_key);
        // A deploy hash, once known, is never erased by an update that does not carry one.
        if incoming.has_deploy_txn_hash() {
            self.deploy_txn_hash.clone_from(&incoming.deploy_txn_hash);
        }
    }

    fn log_key(&self) -> String {
        format!("{}@{}", wp_utils::trim_hash(&self.address), self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> Account {
        Account {
            address: "0x1".into(),
            chain_id: "0x534e5f5345504f4c4941".into(),
            address_index: 0,
            derivation_path: "m/44'/9004'/0'/0/0".into(),
            public_key: "0xabc".into(),
            address_salt: "0xabc".into(),
            deploy_txn_hash: Some("0xdead".into()),
        }
    }

    #[rstest]
    fn test_same_key_is_numeric(stored: Account) {
        let other = Account { address: "1".into(), chain_id: "393402133025997798000961".into(), ..stored.clone() };
        assert!(stored.same_key(&other));
        let other = Account { address: "0x2".into(), ..stored.clone() };
        assert!(!stored.same_key(&other));
    }

    #[rstest]
    fn test_merge_keeps_identity_fields(mut stored: Account) {
        let incoming = Account {
            address: "1".into(),
            chain_id: "393402133025997798000961".into(),
            address_index: 7,
            derivation_path: "m/44'/9004'/0'/0/7".into(),
            public_key: "0xdef".into(),
            address_salt: "0xdef".into(),
            deploy_txn_hash: None,
        };
        stored.merge_from(&incoming);

        assert_eq!(stored.address, "0x1");
        assert_eq!(stored.chain_id, "0x534e5f5345504f4c4941");
        assert_eq!(stored.address_index, 7);
        assert_eq!(stored.derivation_path, "m/44'/9004'/0'/0/7");
        assert_eq!(stored.public_key, "0xdef");
        assert_eq!(stored.address_salt, "0xdef");
        assert_eq!(stored.deploy_txn_hash.as_deref(), Some("0xdead"));
    }

    #[rstest]
    #[case(None, Some("0xdead"))]
    #[case(Some(""), Some("0xdead"))]
    #[case(Some("0xbeef"), Some("0xbeef"))]
    fn test_merge_deploy_txn_hash(mut stored: Account, #[case] incoming: Option<&str>, #[case] expected: Option<&str>) {
        let incoming = Account { deploy_txn_hash: incoming.map(Into::into), ..stored.clone() };
        stored.merge_from(&incoming);
        assert_eq!(stored.deploy_txn_hash.as_deref(), expected);
    }

    #[rstest]
    fn test_serde_shape(stored: Account) {
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["addressIndex"], 0);
        assert_eq!(json["deployTxnHash"], "0xdead");

        let no_deploy = Account { deploy_txn_hash: None, ..stored };
        let json = serde_json::to_value(&no_deploy).unwrap();
        assert!(json.get("deployTxnHash").is_none());
    }
}
