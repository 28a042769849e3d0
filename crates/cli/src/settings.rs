// Path: crates/cli/src/settings.rs

use anyhow::{Context, Result};
use clap::Args;
use propscope_types::config::{DecoderConfig, LogFormat};
use std::path::{Path, PathBuf};

/// Options accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// The node's RPC endpoint.
    #[clap(long, global = true, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Path to a TOML config file.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format (pretty or json).
    #[clap(long, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Reads a `DecoderConfig` from a TOML file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<DecoderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Layers flags (and `RPC_URL`, which clap folds into `--rpc-url`) over the
/// config file over the built-in defaults.
pub fn resolve(args: &GlobalArgs) -> Result<DecoderConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => DecoderConfig::default(),
    };
    if let Some(url) = &args.rpc_url {
        cfg.rpc_url = url.clone();
    }
    if let Some(format) = args.log_format {
        cfg.log_format = format;
    }
    Ok(cfg)
}
