use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use wc_store::accessors::load_state;
use wc_store::locate::find_network;
use wc_store::{StateHost, UpsertOutcome, WalletStore, WalletStoreConfig};
use wp_state::{normalize_felt, Network, StateEntity, WalletState};

use crate::cli::Command;

pub async fn run<H: StateHost + ?Sized>(
    store: &WalletStore<H>,
    config: &WalletStoreConfig,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Show => {
            let state = load_state(store.host(), None).await?;
            print_json(&summarize(&state))
        }
        Command::Transactions(args) => {
            let query = args.to_query(config.list_window_start_millis(now_millis()));
            let transactions = store.list_transactions(&query, None).await?;
            tracing::info!("Found {} matching transactions", transactions.len());
            print_json(&transactions)
        }
        Command::Prune => {
            store.prune_expired(config, now_millis()).await?;
            Ok(())
        }
        Command::ImportNetworks { path } => {
            let outcomes = import_networks(store, &path).await?;
            tracing::info!(
                "🌐 Imported {} networks, {} changed",
                outcomes.len(),
                outcomes.iter().filter(|o| o.is_change()).count()
            );
            Ok(())
        }
    }
}

/// Counts of stored records for one chain.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    pub accounts: usize,
    pub networks: usize,
    pub tokens: usize,
    pub transactions: usize,
    /// Name of the current (non-legacy) network, if one is configured.
    pub current_network: Option<String>,
}

/// Per-chain record counts, keyed by the chain id in hex form. Chain ids that are not numbers are
/// kept as written.
pub fn summarize(state: &WalletState) -> BTreeMap<String, ChainSummary> {
    fn chain_key(chain_id: &str) -> String {
        normalize_felt(chain_id).map_or_else(|| chain_id.to_string(), |felt| format!("{felt:#x}"))
    }
    fn count<E: StateEntity>(
        summary: &mut BTreeMap<String, ChainSummary>,
        state: &WalletState,
        field: impl Fn(&mut ChainSummary) -> &mut usize,
    ) {
        for record in E::collection(state) {
            *field(summary.entry(chain_key(record.chain_id())).or_default()) += 1;
        }
    }

    let mut summary = BTreeMap::new();
    count::<wp_state::Account>(&mut summary, state, |s| &mut s.accounts);
    count::<Network>(&mut summary, state, |s| &mut s.networks);
    count::<wp_state::Token>(&mut summary, state, |s| &mut s.tokens);
    count::<wp_state::Transaction>(&mut summary, state, |s| &mut s.transactions);

    for (chain_id, chain) in summary.iter_mut() {
        chain.current_network = find_network(state, chain_id).map(|network| network.name.clone());
    }
    summary
}

pub async fn import_networks<H: StateHost + ?Sized>(
    store: &WalletStore<H>,
    path: &Path,
) -> anyhow::Result<Vec<UpsertOutcome>> {
    let bytes = tokio::fs::read(path).await.with_context(|| format!("Reading networks from {}", path.display()))?;
    let networks: Vec<Network> =
        serde_json::from_slice(&bytes).with_context(|| format!("Parsing networks from {}", path.display()))?;
    Ok(store.upsert_networks(&networks, None).await?)
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use wc_store::{JsonFileHost, StateLock};

    const SEPOLIA: &str = "0x534e5f5345504f4c4941";

    fn file_store(path: &Path) -> WalletStore<JsonFileHost> {
        WalletStore::with_lock(Arc::new(JsonFileHost::new(path)), Arc::new(StateLock::new("test")))
    }

    #[tokio::test]
    async fn test_import_then_summarize() {
        let dir = tempfile::tempdir().unwrap();
        let networks_path = dir.path().join("networks.json");
        let networks = serde_json::json!([
            {
                "name": "Sepolia",
                "chainId": SEPOLIA,
                "baseUrl": "https://alpha-sepolia.starknet.io",
                "nodeUrl": "https://free-rpc.nethermind.io/sepolia-juno",
                "accountClassHash": "0x29927c8af6bccf3f6fda035981e765a7bdbf18a2dc0d630494f8758aa908e2b"
            },
            {
                "name": "Sepolia (legacy)",
                "chainId": "393402133025997798000961",
                "baseUrl": "https://alpha-sepolia.starknet.io",
                "nodeUrl": "https://free-rpc.nethermind.io/sepolia-juno",
                "accountClassHash": "0x1a736d6ed154502257f02b1ccdf4d9d1089f80811cd6acad48e6b6a9d1f2003",
                "useOldAccounts": true
            }
        ]);
        std::fs::write(&networks_path, serde_json::to_vec(&networks).unwrap()).unwrap();

        let store = file_store(&dir.path().join("state.json"));
        let outcomes = import_networks(&store, &networks_path).await.unwrap();
        assert_eq!(outcomes, vec![UpsertOutcome::Inserted, UpsertOutcome::Inserted]);
        // Importing the same file again changes nothing.
        let outcomes = import_networks(&store, &networks_path).await.unwrap();
        assert!(outcomes.iter().all(|o| !o.is_change()));

        let state = load_state(store.host(), None).await.unwrap();
        let summary = summarize(&state);
        assert_eq!(summary.len(), 1);
        assert_eq!(
            summary[SEPOLIA],
            ChainSummary { networks: 2, current_network: Some("Sepolia".into()), ..Default::default() }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_import_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let networks_path = dir.path().join("networks.json");
        std::fs::write(&networks_path, b"{\"not\": \"a list\"}").unwrap();

        let store = file_store(&dir.path().join("state.json"));
        assert!(import_networks(&store, &networks_path).await.is_err());
        assert!(import_networks(&store, &dir.path().join("missing.json")).await.is_err());
        assert!(!dir.path().join("state.json").exists());
    }

    #[test]
    fn test_summarize_groups_numeric_chain_ids() {
        let state: WalletState = serde_json::from_value(serde_json::json!({
            "tokens": [
                { "address": "0x1", "chainId": "0x1", "name": "A", "symbol": "A", "decimals": 18 },
                { "address": "0x2", "chainId": "1", "name": "B", "symbol": "B", "decimals": 6 },
                { "address": "0x3", "chainId": "devnet", "name": "C", "symbol": "C", "decimals": 18 }
            ]
        }))
        .unwrap();

        let summary = summarize(&state);
        assert_eq!(summary["0x1"].tokens, 2);
        assert_eq!(summary["devnet"].tokens, 1);
        assert_eq!(summary["0x1"].current_network, None);
    }
}
