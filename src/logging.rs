//! Diagnostic tracing on stderr, controlled through `RUST_LOG`.
//!
//! User-facing messages are printed by the CLI directly and are not affected
//! by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, RosterError};

/// Installs the global subscriber. Defaults to `warn` when `RUST_LOG` is unset.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|error| RosterError::Logging(error.to_string()))
}
