//! Crate-level test modules.
//!
//! This module contains tests that cut across components:
//! - Configuration loading from files and the environment
//! - Error types and global error reporting
//! - Loading datasets into a trie and rendering the results
//! - Test fixtures and proptest strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{byte_string_strategy, TestFixture};
