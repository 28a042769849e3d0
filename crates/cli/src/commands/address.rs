// Path: crates/cli/src/commands/address.rs

use anyhow::{Context, Result};
use clap::Parser;
use propscope_types::app::Address;
use propscope_types::config::DecoderConfig;
use std::process::ExitCode;

#[derive(Parser, Debug)]
pub struct AddressArgs {
    /// A bech32m address such as `tnam1...`.
    pub text: String,
}

pub fn run(args: AddressArgs, cfg: &DecoderConfig) -> Result<ExitCode> {
    let addr = Address::from_text(args.text.trim(), &cfg.address_hrp)
        .with_context(|| format!("'{}' is not a valid address", args.text))?;
    let raw = addr
        .to_raw_bytes()
        .context("address has no raw payload")?;
    println!("Address: {}", addr.to_text(&cfg.address_hrp)?);
    println!("Payload: {}", hex::encode(raw));
    Ok(ExitCode::SUCCESS)
}
