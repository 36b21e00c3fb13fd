//! # Prudens CLI Module
//!
//! This module implements the CLI interface for Prudens.
//!
//! ## Available Commands
//!
//! - `export` - Text knowledge base to exchange JSON
//! - `import` - Exchange JSON to text knowledge base
//! - `format` - Normalise a text knowledge base (renumbers rules)
//! - `context` - List the full context of a knowledge base
//! - `check` - Parse a knowledge base and report counts

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use prudens_core::PrudensError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Prudens - knowledge base converter
///
/// Converts rule bases between the textual `@KnowledgeBase` syntax and the
/// JSON exchange form consumed by the Prudens engine.
#[derive(Parser, Debug)]
#[command(name = "prudens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a text knowledge base to exchange JSON
    Export {
        /// Path to the text knowledge base
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },

    /// Convert exchange JSON to a text knowledge base
    Import {
        /// Path to the JSON knowledge base object
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Line separator (`\n` and `\t` escapes are understood)
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Re-render a text knowledge base with canonical numbering
    Format {
        /// Path to the text knowledge base
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Line separator (`\n` and `\t` escapes are understood)
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// List every context name used in rule bodies
    Context {
        /// Path to the text knowledge base
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Parse a knowledge base and report rule counts
    Check {
        /// Path to the text knowledge base
        #[arg(short, long)]
        input: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli, config: &AppConfig) -> Result<(), PrudensError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Export {
            input,
            output,
            compact,
        } => {
            let pretty = config.render.pretty_json && !compact;
            emit(output.as_deref(), &cmd_export(&input, pretty)?)
        }
        Commands::Import {
            input,
            output,
            separator,
        } => {
            let separator = resolve_separator(separator.as_deref(), config);
            emit(output.as_deref(), &cmd_import(&input, &separator)?)
        }
        Commands::Format {
            input,
            output,
            separator,
        } => {
            let separator = resolve_separator(separator.as_deref(), config);
            emit(output.as_deref(), &cmd_format(&input, &separator)?)
        }
        Commands::Context { input } => emit(None, &cmd_context(&input, json_mode)?),
        Commands::Check { input } => emit(None, &cmd_check(&input, json_mode)?),
    }
}

/// The `--separator` flag wins over the configured one.
fn resolve_separator(flag: Option<&str>, config: &AppConfig) -> String {
    flag.map_or_else(|| config.render.separator.clone(), unescape_separator)
}
