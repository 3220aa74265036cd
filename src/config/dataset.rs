//! Dataset configuration module.
//!
//! Describes the plain-text key/value files the command-line tool loads into
//! a trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Dataset parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Separator between key and value; the first occurrence on a line splits it
    pub delimiter: String,

    /// Whether blank lines and lines starting with `#` are ignored
    pub skip_comments: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            skip_comments: true,
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "delimiter cannot be empty".to_string(),
            ));
        }

        if self.delimiter.contains(['\n', '\r']) {
            return Err(ConfigError::ValidationError(
                "delimiter cannot contain line breaks".to_string(),
            ));
        }

        Ok(())
    }
}
