//! Composable transaction filters.
//!
//! A query is a list of [`TransactionFilter`]s combined with AND. Every filter but [`Chain`] carries
//! an optional configuration and lets everything through when it is unset, so a query only pays for
//! the conditions it actually sets. Filtering is stable and never touches the records.
//!
//! [`Chain`]: TransactionFilter::Chain

use wp_state::{felt_eq, ExecutionStatus, FinalityStatus, Transaction, TransactionType};

/// One value or a set of accepted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: PartialEq> Selection<T> {
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::One(expected) => expected == value,
            Self::Many(expected) => expected.contains(value),
        }
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for Selection<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionFilter {
    /// Keeps transactions of this chain. Always active.
    Chain(String),
    /// Keeps transactions whose timestamp, in milliseconds, is at least this value.
    Timestamp(Option<u64>),
    Sender(Option<String>),
    Contract(Option<String>),
    Type(Option<Selection<TransactionType>>),
    /// Both sub-conditions must hold when both are set. A transaction without the corresponding status
    /// never matches a set condition.
    Status { finality: Option<Selection<FinalityStatus>>, execution: Option<Selection<ExecutionStatus>> },
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            Self::Chain(chain_id) => felt_eq(&tx.chain_id, chain_id),
            Self::Timestamp(min_millis) => min_millis.map_or(true, |min| tx.timestamp_millis() >= min),
            Self::Sender(sender) => sender.as_deref().map_or(true, |sender| felt_eq(&tx.sender_address, sender)),
            Self::Contract(contract) => {
                contract.as_deref().map_or(true, |contract| felt_eq(&tx.contract_address, contract))
            }
            Self::Type(types) => types.as_ref().map_or(true, |types| types.contains(&tx.txn_type)),
            Self::Status { finality, execution } => {
                let finality_ok = finality
                    .as_ref()
                    .map_or(true, |expected| tx.finality_status.is_some_and(|status| expected.contains(&status)));
                let execution_ok = execution
                    .as_ref()
                    .map_or(true, |expected| tx.execution_status.is_some_and(|status| expected.contains(&status)));
                finality_ok && execution_ok
            }
        }
    }

    pub fn is_pass_through(&self) -> bool {
        match self {
            Self::Chain(_) => false,
            Self::Timestamp(min) => min.is_none(),
            Self::Sender(address) | Self::Contract(address) => address.is_none(),
            Self::Type(types) => types.is_none(),
            Self::Status { finality, execution } => finality.is_none() && execution.is_none(),
        }
    }
}

/// Transactions matching every filter, in their original order.
pub fn filter_transactions<'a, I>(
    transactions: I,
    filters: &'a [TransactionFilter],
) -> impl Iterator<Item = &'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
    I::IntoIter: 'a,
{
    let active = filters.iter().filter(|filter| !filter.is_pass_through()).collect::<Vec<_>>();
    transactions.into_iter().filter(move |tx| active.iter().all(|filter| filter.matches(tx)))
}

/// A transaction listing request. Only the chain is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub chain_id: String,
    pub sender_address: Option<String>,
    pub contract_address: Option<String>,
    pub txn_type: Option<Selection<TransactionType>>,
    pub finality_status: Option<Selection<FinalityStatus>>,
    pub execution_status: Option<Selection<ExecutionStatus>>,
    pub min_timestamp_millis: Option<u64>,
}

impl TransactionQuery {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self { chain_id: chain_id.into(), ..Default::default() }
    }

    pub fn with_sender(mut self, sender_address: impl Into<String>) -> Self {
        self.sender_address = Some(sender_address.into());
        self
    }

    pub fn with_contract(mut self, contract_address: impl Into<String>) -> Self {
        self.contract_address = Some(contract_address.into());
        self
    }

    pub fn with_type(mut self, txn_type: impl Into<Selection<TransactionType>>) -> Self {
        self.txn_type = Some(txn_type.into());
        self
    }

    pub fn with_finality_status(mut self, status: impl Into<Selection<FinalityStatus>>) -> Self {
        self.finality_status = Some(status.into());
        self
    }

    pub fn with_execution_status(mut self, status: impl Into<Selection<ExecutionStatus>>) -> Self {
        self.execution_status = Some(status.into());
        self
    }

    pub fn since_millis(mut self, min_timestamp_millis: u64) -> Self {
        self.min_timestamp_millis = Some(min_timestamp_millis);
        self
    }

    pub fn filters(&self) -> Vec<TransactionFilter> {
        vec![
            TransactionFilter::Chain(self.chain_id.clone()),
            TransactionFilter::Timestamp(self.min_timestamp_millis),
            TransactionFilter::Sender(self.sender_address.clone()),
            TransactionFilter::Contract(self.contract_address.clone()),
            TransactionFilter::Type(self.txn_type.clone()),
            TransactionFilter::Status {
                finality: self.finality_status.clone(),
                execution: self.execution_status.clone(),
            },
        ]
    }
}
