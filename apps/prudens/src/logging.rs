//! # Logging
//!
//! Installs the global `tracing` subscriber. Output goes to stderr so that
//! stdout stays reserved for command results.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used by `--verbose`.
const VERBOSE_FILTER: &str = "prudens=debug,prudens_core=debug";

/// Install the subscriber. `RUST_LOG` wins over the configured filter.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_FILTER
    } else {
        config.filter.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
