// Tracing subscriber setup for the CLI
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize logging. `RUST_LOG` wins; otherwise the given default filter.
pub fn init(default_filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| anyhow!("invalid log filter '{default_filter}': {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to set tracing subscriber: {e}"))
}
