//! Niihau Byte Trie Library
//!
//! This library provides a concurrent prefix tree keyed by byte sequences,
//! together with the configuration, error handling and dataset utilities used
//! by the `niihau` command-line tool.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] holds the trie and its traversal algorithms
//! - [`config`] loads and validates settings from files and the environment
//! - [`error`] defines the error types of the surrounding layers
//! - [`utils`] parses key/value datasets and renders results

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Niihau toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
