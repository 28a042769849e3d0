// Path: crates/cli/src/commands/proposal.rs

use anyhow::Result;
use clap::Parser;
use propscope_client::fetch_summary;
use propscope_types::app::ProposalSummary;
use propscope_types::config::DecoderConfig;
use propscope_types::error::ProposalError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
pub struct ProposalArgs {
    /// The proposal to fetch.
    #[clap(short = 'i', long, default_value_t = 0)]
    pub proposal_id: u64,

    /// Print the summary as JSON.
    #[clap(long)]
    pub json: bool,
}

pub fn print_summary(summary: &ProposalSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

pub async fn run(args: ProposalArgs, cfg: &DecoderConfig) -> Result<ExitCode> {
    let gw = super::gateway(cfg)?;
    tracing::info!(id = args.proposal_id, rpc_url = %cfg.rpc_url, "fetching proposal");
    match fetch_summary(&gw, args.proposal_id, &cfg.address_hrp).await {
        Ok(summary) => {
            print_summary(&summary, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e)
            if matches!(
                e.downcast_ref::<ProposalError>(),
                Some(ProposalError::RecordAbsent)
            ) =>
        {
            println!("Proposal {} not found", args.proposal_id);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}
