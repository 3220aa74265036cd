//! Data structures provided by the Niihau toolkit.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Thread-safe access through explicit locking
//! - Iterative algorithms that never recurse per key byte

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::NiihauTrie;
