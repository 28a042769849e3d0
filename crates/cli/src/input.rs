// Path: crates/cli/src/input.rs

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};

/// Parses a hex string, tolerating a `0x` prefix and embedded whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let body = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(body).context("Invalid hex input")
}

/// Parses standard (padded) base64, as returned in an ABCI `value` field.
pub fn parse_base64(s: &str) -> Result<Vec<u8>> {
    B64.decode(s.trim().as_bytes())
        .context("Invalid base64 input")
}

/// Picks whichever of the two encodings was supplied.
pub fn raw_bytes(hex: Option<&str>, base64: Option<&str>) -> Result<Vec<u8>> {
    match (hex, base64) {
        (Some(h), None) => parse_hex(h),
        (None, Some(b)) => parse_base64(b),
        (Some(_), Some(_)) => bail!("pass either --hex or --base64, not both"),
        (None, None) => bail!("one of --hex or --base64 is required"),
    }
}
