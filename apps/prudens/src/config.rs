//! # Configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config FILE`, or `prudens.toml` in the working directory)
//! 3. Environment (`PRUDENS_LOG_FORMAT=text|json`, `RUST_LOG`)
//! 4. Command-line flags (`--separator`, `--verbose`)
//!
//! ```toml
//! [render]
//! separator = "\n"
//! pretty_json = true
//!
//! [logging]
//! format = "text"
//! filter = "prudens=info"
//! ```

use prudens_core::PrudensError;
use prudens_core::primitives::DEFAULT_KB_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "prudens.toml";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "PRUDENS_LOG_FORMAT";

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG SECTIONS
// =============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// How knowledge bases are written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Separator between lines of a rendered text knowledge base.
    pub separator: String,
    /// Pretty-print exported JSON.
    pub pretty_json: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_KB_SEPARATOR.to_string(),
            pretty_json: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse an environment value; anything but `json` means text.
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: "prudens=info".to_string(),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Load configuration from `path`, or from `prudens.toml` if present.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, PrudensError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        Ok(config.with_env_overrides(std::env::var(LOG_FORMAT_ENV).ok().as_deref()))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, PrudensError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PrudensError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PrudensError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            PrudensError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, PrudensError> {
        toml::from_str(text).map_err(|e| PrudensError::ConfigError(e.to_string()))
    }

    /// Apply the `PRUDENS_LOG_FORMAT` value, if any.
    #[must_use]
    pub fn with_env_overrides(mut self, log_format: Option<&str>) -> Self {
        if let Some(value) = log_format {
            self.logging.format = LogFormat::from_env_value(value);
        }
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
