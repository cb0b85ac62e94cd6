use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::{Account, Network, Token, Transaction};

/// The wallet state document, persisted as a single value by the host.
///
/// Collections stay `None` until their first record is inserted. Top-level fields this crate does not
/// model are kept in `extra` and written back as they were read.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub accounts: Option<Vec<Account>>,
    pub networks: Option<Vec<Network>>,
    pub tokens: Option<Vec<Token>>,
    pub transactions: Option<Vec<Transaction>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
