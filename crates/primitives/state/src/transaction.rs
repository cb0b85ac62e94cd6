use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{felt_eq, EntityKind, StateEntity, WalletState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Declare,
    Deploy,
    DeployAccount,
    #[serde(rename = "INVOKE_FUNCTION", alias = "INVOKE")]
    Invoke,
    L1Handler,
}

/// Transaction finality status as reported by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalityStatus {
    NotReceived,
    Received,
    Pending,
    /// Transaction has been accepted on L2 but not yet on L1
    AcceptedOnL2,
    /// Transaction has been accepted on both L2 and L1
    AcceptedOnL1,
    Rejected,
}

impl FinalityStatus {
    /// Accepted on either finality tier.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::AcceptedOnL2 | Self::AcceptedOnL1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Succeeded,
    Reverted,
    Rejected,
}

/// A transaction sent from (or tracked by) the wallet, keyed by `(txn_hash, chain_id)`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub txn_hash: String,
    pub txn_type: TransactionType,
    pub chain_id: String,
    pub sender_address: String,
    pub contract_address: String,
    #[serde(default)]
    pub contract_func_name: String,
    #[serde(default)]
    pub contract_call_data: Vec<String>,
    /// Legacy combined status string, kept as reported.
    pub status: Option<String>,
    pub execution_status: Option<ExecutionStatus>,
    pub finality_status: Option<FinalityStatus>,
    #[serde(default)]
    pub failure_reason: String,
    /// Seconds since the unix epoch.
    pub timestamp: u64,
}

impl Transaction {
    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp.saturating_mul(1000)
    }

    pub fn is_accepted(&self) -> bool {
        self.finality_status.as_ref().is_some_and(FinalityStatus::is_accepted)
    }
}

impl StateEntity for Transaction {
    const KIND: EntityKind = EntityKind::Transaction;

    fn collection(state: &WalletState) -> &[Self] {
        state.transactions.as_deref().unwrap_or_default()
    }

    fn collection_mut(state: &mut WalletState) -> &mut Option<Vec<Self>> {
        &mut state.transactions
    }

    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    fn same_key(&self, other: &Self) -> bool {
        felt_eq(&self.txn_hash, &other.txn_hash) && felt_eq(&self.chain_id, &other.chain_id)
    }

    fn merge_from(&mut self, incoming: &Self) {
        self.status.clone_from(&incoming.status);
        self.execution_status = incoming.execution_status;
        self.finality_status = incoming.finality_status;
        self.failure_reason.clone_from(&incoming.failure_reason);
        self.timestamp = incoming.timestamp;
    }

    fn log_key(&self) -> String {
        format!("{}@{}", wp_utils::trim_hash(&self.txn_hash), self.chain_id)
    }
}
