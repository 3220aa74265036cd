//! Output configuration module.
//!
//! Controls how the command-line tool renders keys and values, which are
//! arbitrary byte sequences.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Rendering format for command results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// How byte sequences are turned into printable strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ByteEncoding {
    /// UTF-8, replacing invalid sequences
    #[default]
    Utf8,
    /// Lowercase hexadecimal
    Hex,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Rendering format
    pub format: OutputFormat,

    /// Encoding applied to keys and values
    pub encoding: ByteEncoding,

    /// Whether enumeration results are sorted before display
    pub sorted: bool,
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
