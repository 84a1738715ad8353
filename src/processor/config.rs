//! Processor configuration.
//!
//! Every field has a default matching the plain change-detection rule, so
//! an empty TOML document yields `ProcessorConfig::default()`.

use crate::processor::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Tunables for [`ReceiptProcessor`](crate::processor::ReceiptProcessor).
///
/// # Example
///
/// ```rust
/// use receipt_status::processor::ProcessorConfig;
///
/// let config = ProcessorConfig::from_toml_str("skip_final = true").unwrap();
/// assert!(config.skip_final);
/// assert!(config.record_cleared_status);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Record a `None` entry when a receipt's live status is cleared.
    /// When `false`, clearing a status is never treated as a change.
    pub record_cleared_status: bool,

    /// Skip receipts whose recorded status is final during bulk runs.
    pub skip_final: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            record_cleared_status: true,
            skip_final: false,
        }
    }
}

impl ProcessorConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), ?config, "loaded processor configuration");
        Ok(config)
    }
}
