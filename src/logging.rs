use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr fmt subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value),
        _ => EnvFilter::try_new(level.unwrap_or(DEFAULT_FILTER)),
    }
    .map_err(|err| anyhow!("invalid log filter: {err}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("logging already initialized: {err}"))
}
