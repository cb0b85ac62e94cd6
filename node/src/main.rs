//! Wallet state operator command line.
#![warn(missing_docs)]

mod cli;
mod commands;

use anyhow::{bail, Context};
use clap::Parser;
use cli::WalletCmd;
use figment::{
    providers::{Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use wc_store::{JsonFileHost, WalletStore, WalletStoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cmd = WalletCmd::parse();
    let config = load_config(&cmd)?;

    tracing::info!("💼 Wallet state document: {}", config.state_path.display());
    let store = WalletStore::new(Arc::new(JsonFileHost::new(&config.state_path)));
    commands::run(&store, &config, cmd.command).await
}

/// Logs go to stderr so that command output on stdout stays machine readable.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::builder().with_default_directive(Level::INFO.into()).parse_lossy(""));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();
}

/// A config file, when given, replaces the store arguments entirely. Fields it leaves out take
/// their default value.
fn load_config(cmd: &WalletCmd) -> anyhow::Result<WalletStoreConfig> {
    let mut config = Figment::new();

    if let Some(config_path) = cmd.config_file.clone() {
        config = match config_path.extension() {
            None => bail!("Unsupported file type for config file."),
            Some(os_str) => match os_str.to_str() {
                Some("toml") => config.merge(Toml::file(config_path)),
                Some("json") => config.merge(Json::file(config_path)),
                Some("yaml") => config.merge(Yaml::file(config_path)),
                _ => bail!("Unsupported file type for config file."),
            },
        }
    } else {
        config = config.merge(Serialized::defaults(WalletStoreConfig::from(cmd.store_params.clone())));
    }

    config.extract().context("Loading the store configuration")
}
