// Path: crates/telemetry/src/init.rs
use propscope_types::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// The filter used when `RUST_LOG` is unset. Decoder output goes to stdout, so
/// only problems are logged by default.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the level filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initializes the global `tracing` subscriber, writing to stderr in the given format.
pub fn init_tracing(format: LogFormat) -> Result<(), anyhow::Error> {
    let fmt_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed(),
    };
    let subscriber = Registry::default()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(fmt_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

