//! Command line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "txflood", version, about = "Batch value-transfer flooding for EVM JSON-RPC nodes")]
pub struct Cli {
    /// Path to the settings file (overrides TXFLOOD_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate fresh accounts and print their keys
    Generate {
        /// How many accounts to generate
        #[arg(long, default_value_t = 4)]
        count: usize,
    },
    /// Fund the configured source accounts from the funder account
    Fund,
    /// Build, sign and broadcast the transfer batches (the default)
    Flood,
}
