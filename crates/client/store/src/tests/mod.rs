#![cfg(test)]

use wp_state::{Account, FinalityStatus, Network, Token, Transaction, TransactionType};

mod remove;

pub fn account(address: &str, chain_id: &str, address_index: u32) -> Account {
    Account {
        address: address.into(),
        chain_id: chain_id.into(),
        address_index,
        derivation_path: format!("m/44'/9004'/0'/0/{address_index}"),
        public_key: "0x4b0a1d5b2d6e3c4d".into(),
        address_salt: "0x4b0a1d5b2d6e3c4d".into(),
        deploy_txn_hash: None,
    }
}

pub fn network(chain_id: &str, legacy: bool) -> Network {
    Network {
        name: if legacy { "Legacy network".into() } else { "Network".into() },
        chain_id: chain_id.into(),
        base_url: "https://alpha-sepolia.starknet.io".into(),
        node_url: "https://free-rpc.nethermind.io/sepolia-juno".into(),
        explorer_url: None,
        account_class_hash: "0x29927c8af6bccf3f6fda035981e765a7bdbf18a2dc0d630494f8758aa908e2b".into(),
        use_old_accounts: legacy,
    }
}

pub fn token(address: &str, chain_id: &str) -> Token {
    Token {
        address: address.into(),
        chain_id: chain_id.into(),
        name: "Token".into(),
        symbol: "TKN".into(),
        decimals: 18,
    }
}

pub fn transaction(txn_hash: &str, chain_id: &str, finality: FinalityStatus, timestamp: u64) -> Transaction {
    Transaction {
        txn_hash: txn_hash.into(),
        txn_type: TransactionType::Invoke,
        chain_id: chain_id.into(),
        sender_address: "0xa11ce".into(),
        contract_address: "0xc0ffee".into(),
        contract_func_name: "transfer".into(),
        contract_call_data: vec![],
        status: None,
        execution_status: None,
        finality_status: Some(finality),
        failure_reason: String::new(),
        timestamp,
    }
}
