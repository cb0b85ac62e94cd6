use serde::Serialize;
use std::fmt;

use crate::WalletState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Account,
    Network,
    Token,
    Transaction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Network => write!(f, "network"),
            Self::Token => write!(f, "token"),
            Self::Transaction => write!(f, "transaction"),
        }
    }
}

/// A record kind stored in the [`WalletState`] document.
///
/// This is everything the generic upsert needs to know about a kind: where its collection lives,
/// how its natural key is compared, and which fields an update is allowed to touch.
pub trait StateEntity: Clone + Serialize + fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    /// The stored collection for this kind, empty when the document has none yet.
    fn collection(state: &WalletState) -> &[Self];

    /// The collection slot in the document. `None` until the first record of this kind is inserted.
    fn collection_mut(state: &mut WalletState) -> &mut Option<Vec<Self>>;

    fn chain_id(&self) -> &str;

    /// Whether `self` (a stored record) and `other` share the same natural key.
    fn same_key(&self, other: &Self) -> bool;

    /// Copies the mutable fields of `incoming` into `self`. Identity fields are left untouched.
    fn merge_from(&mut self, incoming: &Self);

    /// Short identifier used in log lines.
    fn log_key(&self) -> String;
}
