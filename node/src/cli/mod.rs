//! Command line arguments.

pub mod store;
pub mod transactions;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use store::StoreParams;
pub use transactions::TransactionsArgs;

#[derive(Clone, Debug, Parser)]
#[clap(name = "wallet-cli", version, about = "Inspect and maintain a wallet state document")]
pub struct WalletCmd {
    /// Load the store settings from a `.json`, `.toml` or `.yaml` file instead of the arguments below.
    #[clap(env = "WALLET_CONFIG_FILE", long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[clap(flatten)]
    pub store_params: StoreParams,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Summarize the stored accounts, networks, tokens and transactions of every chain.
    Show,
    /// List the transactions of a chain matching the given filters.
    Transactions(TransactionsArgs),
    /// Drop accepted transactions older than the retention period.
    Prune,
    /// Insert or update the networks listed in a JSON file.
    ImportNetworks {
        /// A JSON array of network records.
        #[clap(value_name = "FILE")]
        path: PathBuf,
    },
}
