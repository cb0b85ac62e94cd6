//! Data model of the wallet state document.
//!
//! The document is a single structured value holding every [`Account`], [`Network`], [`Token`] and
//! [`Transaction`] known to the wallet, each scoped to a chain. Records are identified by a natural
//! key (address and chain, hash and chain, ...) where addresses, hashes and chain ids are compared as
//! felts rather than as raw strings: `"0x1"` and `"1"` name the same account.
//!
//! Every record kind implements [`StateEntity`], which is what the store uses to locate, compare and
//! merge records generically.

mod account;
mod canonical;
mod entity;
mod felt;
mod network;
mod state;
mod token;
mod transaction;

pub use account::Account;
pub use canonical::{canonical_json, is_same_record};
pub use entity::{EntityKind, StateEntity};
pub use felt::{felt_eq, normalize_felt};
pub use network::Network;
pub use state::WalletState;
pub use token::Token;
pub use transaction::{ExecutionStatus, FinalityStatus, Transaction, TransactionType};
