use wc_store::{Selection, TransactionQuery};
use wp_state::{ExecutionStatus, FinalityStatus, TransactionType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeArg {
    Declare,
    Deploy,
    DeployAccount,
    Invoke,
    L1Handler,
}

impl From<TypeArg> for TransactionType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Declare => Self::Declare,
            TypeArg::Deploy => Self::Deploy,
            TypeArg::DeployAccount => Self::DeployAccount,
            TypeArg::Invoke => Self::Invoke,
            TypeArg::L1Handler => Self::L1Handler,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FinalityArg {
    Received,
    Pending,
    #[value(name = "accepted-on-l2")]
    AcceptedOnL2,
    #[value(name = "accepted-on-l1")]
    AcceptedOnL1,
    Rejected,
    NotReceived,
}

impl From<FinalityArg> for FinalityStatus {
    fn from(value: FinalityArg) -> Self {
        match value {
            FinalityArg::Received => Self::Received,
            FinalityArg::Pending => Self::Pending,
            FinalityArg::AcceptedOnL2 => Self::AcceptedOnL2,
            FinalityArg::AcceptedOnL1 => Self::AcceptedOnL1,
            FinalityArg::Rejected => Self::Rejected,
            FinalityArg::NotReceived => Self::NotReceived,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExecutionArg {
    Succeeded,
    Reverted,
    Rejected,
}

impl From<ExecutionArg> for ExecutionStatus {
    fn from(value: ExecutionArg) -> Self {
        match value {
            ExecutionArg::Succeeded => Self::Succeeded,
            ExecutionArg::Reverted => Self::Reverted,
            ExecutionArg::Rejected => Self::Rejected,
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct TransactionsArgs {
    /// Chain id, hex or decimal.
    #[clap(long, value_name = "CHAIN ID")]
    pub chain_id: String,

    #[clap(long, value_name = "ADDRESS")]
    pub sender: Option<String>,

    #[clap(long, value_name = "ADDRESS")]
    pub contract: Option<String>,

    /// Repeat to accept several types.
    #[clap(long = "type", value_enum)]
    pub txn_type: Vec<TypeArg>,

    /// Repeat to accept several finality statuses.
    #[clap(long, value_enum)]
    pub finality: Vec<FinalityArg>,

    /// Repeat to accept several execution statuses.
    #[clap(long, value_enum)]
    pub execution: Vec<ExecutionArg>,

    /// Only keep transactions at or after this unix timestamp, in milliseconds. Defaults to the
    /// configured list window.
    #[clap(long, value_name = "MILLIS")]
    pub since: Option<u64>,
}

fn selection<A: Copy + Into<T>, T>(args: &[A]) -> Option<Selection<T>> {
    match args {
        [] => None,
        [one] => Some(Selection::One((*one).into())),
        many => Some(Selection::Many(many.iter().map(|&a| a.into()).collect())),
    }
}

impl TransactionsArgs {
    pub fn to_query(&self, default_since_millis: u64) -> TransactionQuery {
        TransactionQuery {
            chain_id: self.chain_id.clone(),
            sender_address: self.sender.clone(),
            contract_address: self.contract.clone(),
            txn_type: selection(&self.txn_type),
            finality_status: selection(&self.finality),
            execution_status: selection(&self.execution),
            min_timestamp_millis: Some(self.since.unwrap_or(default_since_millis)),
        }
    }
}
