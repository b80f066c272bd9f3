//! txflood - batch value-transfer flooding for EVM JSON-RPC nodes
//!
//! Generates accounts, funds them from a funder account, and broadcasts
//! batches of signed value transfers with incrementing per-account nonces,
//! interleaved round-major across accounts before submission.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

mod chain;
mod cli;
mod config;
mod error;
mod funding;
mod keyring;
mod sequencer;
mod units;

use chain::ChainProvider;
use cli::{Cli, Command};
use config::Settings;
use keyring::{Keyring, KeyringStore};
use sequencer::{broadcast_all, build_batches, flatten, TransferPlan};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    if let Some(path) = &cli.config {
        std::env::set_var("TXFLOOD_CONFIG", path);
    }

    match cli.command.unwrap_or(Command::Flood) {
        Command::Generate { count } => generate(count),
        Command::Fund => fund(&Settings::load()?).await?,
        Command::Flood => flood(&Settings::load()?).await?,
    }

    Ok(())
}

fn generate(count: usize) {
    for _ in 0..count {
        let keyring = Keyring::generate();
        println!(
            "private key : {}, address : {:?}",
            keyring.private_key_hex(),
            keyring.address()
        );
    }
}

async fn fund(settings: &Settings) -> Result<()> {
    let provider = ChainProvider::new(&settings.node).await?;

    let funder = Keyring::from_private_key(&settings.funding.funder_key)?;
    let amount = units::parse_amount(&settings.funding.amount)?;
    let targets = settings
        .accounts
        .private_keys
        .iter()
        .map(|key| Keyring::from_private_key(key).map(|k| k.address()))
        .collect::<Result<Vec<_>, _>>()?;

    funding::fund_accounts(&provider, funder, &targets, amount, settings.funding.gas_limit)
        .await?;

    Ok(())
}

async fn flood(settings: &Settings) -> Result<()> {
    let provider = ChainProvider::new(&settings.node).await?;

    let mut store = KeyringStore::new(provider.chain_id());
    for key in &settings.accounts.private_keys {
        store.register(Keyring::from_private_key(key)?);
    }
    info!("Registered {} source accounts", store.len());

    let plan = TransferPlan {
        destination: settings
            .flood
            .destination
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid destination address: {}", e))?,
        value: units::parse_amount(&settings.flood.value)?,
        gas_limit: settings.flood.gas_limit,
        gas_price: provider.gas_price().await?,
        chain_id: provider.chain_id(),
        txs_per_account: settings.flood.txs_per_account,
    };

    let batches = build_batches(&provider, &store, &plan).await?;
    let flat = flatten(&batches)?;
    info!(
        "Broadcasting {} transactions from {} accounts",
        flat.len(),
        store.len()
    );

    let report = broadcast_all(&provider, &flat).await;
    info!(
        "Submitted {}/{} transactions",
        report.submitted.len(),
        report.total()
    );
    if !report.all_submitted() {
        warn!("{} submissions failed", report.failures.len());
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,txflood=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
