use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use wc_store::WalletStoreConfig;
use wp_utils::parsers::parse_duration;
use wp_utils::serde::{deserialize_duration, serialize_duration};

#[derive(Clone, Debug, clap::Args, Deserialize, Serialize)]
pub struct StoreParams {
    /// The path of the wallet state document.
    #[clap(env = "WALLET_STATE_PATH", long, default_value = "wallet-state.json", value_name = "PATH")]
    pub state_path: PathBuf,

    /// Accepted transactions older than this are pruned. Ex: "30d", "12h".
    #[clap(env = "WALLET_RETENTION", long = "retention", default_value = "30d", value_parser = parse_duration)]
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub transaction_retention: Duration,

    /// How far back `transactions` looks when no `--since` is given.
    #[clap(env = "WALLET_LIST_WINDOW", long, default_value = "10d", value_parser = parse_duration)]
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub list_window: Duration,
}

impl From<StoreParams> for WalletStoreConfig {
    fn from(params: StoreParams) -> Self {
        Self {
            state_path: params.state_path,
            transaction_retention: params.transaction_retention,
            list_window: params.list_window,
        }
    }
}
