// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Propscope CLI
//!
//! Fetches, decodes and prints governance proposals from a node's ABCI endpoint.

use anyhow::Result;
use clap::{Parser, Subcommand};
use propscope_cli::settings::{self, GlobalArgs};
use std::process::ExitCode;

mod commands;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "propscope",
    version,
    about = "Decode on-chain governance proposals.",
    long_about = "Reads governance proposal records over ABCI, decodes them and reports their voting status."
)]
struct Cli {
    #[clap(flatten)]
    global: GlobalArgs,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a proposal and print its summary.
    Proposal(proposal::ProposalArgs),

    /// Print the last committed epoch.
    Epoch,

    /// Decode a raw proposal record without contacting a node.
    Decode(decode::DecodeArgs),

    /// Validate an address and print its raw payload.
    Address(address::AddressArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = settings::resolve(&cli.global)?;
    propscope_telemetry::init_tracing(cfg.log_format)?;
    tracing::debug!(rpc_url = %cfg.rpc_url, hrp = %cfg.address_hrp, "resolved configuration");

    match cli.command {
        Commands::Proposal(args) => proposal::run(args, &cfg).await,
        Commands::Epoch => epoch::run(&cfg).await,
        Commands::Decode(args) => decode::run(args, &cfg),
        Commands::Address(args) => address::run(args, &cfg),
    }
}
