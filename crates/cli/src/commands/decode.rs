// Path: crates/cli/src/commands/decode.rs

use anyhow::Result;
use clap::{ArgGroup, Parser};
use propscope_cli::input::raw_bytes;
use propscope_types::app::summarize;
use propscope_types::config::DecoderConfig;
use propscope_types::error::ProposalError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(group(ArgGroup::new("data").required(true).args(&["hex", "base64"])))]
pub struct DecodeArgs {
    /// The `Option<StorageProposal>` record as hex.
    #[clap(long)]
    pub hex: Option<String>,

    /// The `Option<StorageProposal>` record as base64.
    #[clap(long)]
    pub base64: Option<String>,

    /// The epoch to classify the proposal against.
    #[clap(long)]
    pub epoch: u64,

    /// Print the summary as JSON.
    #[clap(long)]
    pub json: bool,
}

pub fn run(args: DecodeArgs, cfg: &DecoderConfig) -> Result<ExitCode> {
    let raw = raw_bytes(args.hex.as_deref(), args.base64.as_deref())?;
    match summarize(&raw, args.epoch, &cfg.address_hrp) {
        Ok(summary) => {
            super::proposal::print_summary(&summary, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(ProposalError::RecordAbsent) => {
            println!("Record holds no proposal");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(anyhow::Error::new(e).context("failed to decode proposal record")),
    }
}
