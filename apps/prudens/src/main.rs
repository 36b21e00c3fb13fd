//! # Prudens - Knowledge Base Tool
//!
//! Command-line front end for the `prudens-core` format layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │               apps/prudens (THE BINARY)            │
//! │                                                    │
//! │  ┌─────────────┐   ┌─────────────┐   ┌──────────┐  │
//! │  │    CLI      │   │   Config    │   │ Logging  │  │
//! │  │   (clap)    │   │   (toml)    │   │(tracing) │  │
//! │  └──────┬──────┘   └──────┬──────┘   └────┬─────┘  │
//! │         └─────────────────┼───────────────┘        │
//! │                           ▼                        │
//! │                  ┌────────────────┐                │
//! │                  │  prudens-core  │                │
//! │                  │  (THE FORMAT)  │                │
//! │                  └────────────────┘                │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! prudens export -i rules.kb -o rules.json
//! prudens import -i rules.json
//! prudens format -i rules.kb --separator ' '
//! prudens context -i rules.kb --json-mode
//! prudens check -i rules.kb
//! ```

use clap::Parser;
use prudens::cli::{self, Cli};
use prudens::config::AppConfig;
use prudens::logging;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    // Logging is not installed yet, so configuration errors go to stderr directly.
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    logging::init(&config.logging, cli.verbose);
    tracing::debug!("Configuration: {:?}", config);

    if let Err(e) = cli::execute(cli, &config) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
