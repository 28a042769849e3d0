// Path: crates/cli/src/commands/epoch.rs

use anyhow::Result;
use propscope_client::fetch_epoch;
use propscope_types::config::DecoderConfig;
use std::process::ExitCode;

pub async fn run(cfg: &DecoderConfig) -> Result<ExitCode> {
    let gw = super::gateway(cfg)?;
    let epoch = fetch_epoch(&gw).await?;
    println!("Last committed epoch: {}", epoch);
    Ok(ExitCode::SUCCESS)
}
