// Path: crates/cli/src/commands/mod.rs

use anyhow::Result;
use propscope_client::AbciGateway;
use propscope_types::config::DecoderConfig;
use std::time::Duration;

pub mod address;
pub mod decode;
pub mod epoch;
pub mod proposal;

fn gateway(cfg: &DecoderConfig) -> Result<AbciGateway> {
    AbciGateway::new(
        cfg.rpc_url.clone(),
        Duration::from_secs(cfg.request_timeout_secs),
    )
}
