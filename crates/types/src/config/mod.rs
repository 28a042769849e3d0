// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the proposal decoder.
use crate::string_encoding::ADDRESS_HRP;
use serde::{Deserialize, Serialize};

/// The default RPC endpoint of a local node.
pub const DEFAULT_RPC_URL: &str = "http://localhost:26657";

/// Selects the output format of the global log subscriber.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Configuration for the decoder CLI (`propscope.toml`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// The base URL of the node's RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// The human-readable prefix used when rendering addresses.
    #[serde(default = "default_address_hrp")]
    pub address_hrp: String,
    /// Timeout for a single RPC request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// The log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}
fn default_address_hrp() -> String {
    ADDRESS_HRP.to_string()
}
fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            address_hrp: default_address_hrp(),
            request_timeout_secs: default_request_timeout_secs(),
            log_format: LogFormat::default(),
        }
    }
}
