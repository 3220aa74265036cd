//! Niihau Byte Trie Implementation
//!
//! This module provides a thread-safe prefix tree keyed by arbitrary byte
//! sequences. It supports insertion, exact lookup, full enumeration of keys and
//! values, and prefix-constrained enumeration.
//!
//! # Concurrency
//!
//! A single readers-writer lock guards the whole tree together with its node
//! counter. [`NiihauTrie::insert`] takes the lock exclusively; every other
//! operation, including the four enumerations, takes it shared. Nodes are never
//! handed out by reference, so results are owned copies.
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::niihau_trie::NiihauTrie;
//!
//! let trie = NiihauTrie::new();
//! trie.insert("cat", "meow");
//! trie.insert("car", "vroom");
//!
//! assert_eq!(trie.search("cat"), Some(b"meow".to_vec()));
//! assert_eq!(trie.search("ca"), None);
//! assert_eq!(trie.get_prefix_keys("ca").len(), 2);
//! ```

mod node;
mod traversal;

#[cfg(test)]
mod tests;

use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, trace};

use node::TrieNode;

/// Tree state guarded by the trie's lock.
#[derive(Debug)]
struct TrieInner {
    /// Root of the tree, created once and never replaced
    root: TrieNode,

    /// One for the root plus one per distinct stored key
    size: usize,
}

/// Niihau Byte Trie: a concurrent prefix tree over byte keys and byte values.
///
/// Key features:
/// * Zero-length keys address the root and zero-length values are real values
/// * Re-inserting a key updates its value in place
/// * Prefix queries return keys with the matched prefix bytes included
/// * Thread-safe behind one readers-writer lock
pub struct NiihauTrie {
    inner: RwLock<TrieInner>,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` holding only its root.
    ///
    /// # Returns
    ///
    /// A new `NiihauTrie` whose [`size`](Self::size) is `1`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TrieInner {
                root: TrieNode::root(),
                size: 1,
            }),
        }
    }

    /// Returns the node counter: the root plus one per distinct stored key.
    pub fn size(&self) -> usize {
        self.inner.read().size
    }

    /// Returns `true` when no key has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.size() == 1
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Walks the key byte by byte from the root, creating missing nodes, then
    /// stores `value` on the terminal node. An existing key is updated in place
    /// and does not change [`size`](Self::size).
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. May be empty, in which case the root stores the value.
    /// * `value` - The value to associate with the key. May be empty.
    ///
    /// # Returns
    ///
    /// `true` if a new key was stored, `false` if an existing key was updated.
    pub fn insert<K, V>(&self, key: K, value: V) -> bool
    where
        K: AsRef<[u8]>,
        V: Into<Vec<u8>>,
    {
        let key = key.as_ref();
        let value = value.into();

        let mut inner = self.inner.write();
        let (terminal, created) = inner.root.descend_or_create(key);
        let is_new = terminal.value.replace(value).is_none();

        if is_new {
            inner.size += 1;
        }

        trace!(
            key_len = key.len(),
            nodes_created = created,
            is_new,
            "Inserted trie entry"
        );

        is_new
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up. An empty key addresses the root.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if the path does not exist or ends on a
    /// node where no key terminates.
    pub fn search<K>(&self, key: K) -> Option<Vec<u8>>
    where
        K: AsRef<[u8]>,
    {
        let inner = self.inner.read();
        inner
            .root
            .descend(key.as_ref())
            .and_then(|node| node.value.clone())
    }

    /// Checks if a key is stored in the trie.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        let inner = self.inner.read();
        inner
            .root
            .descend(key.as_ref())
            .is_some_and(|node| node.value.is_some())
    }

    /// Returns every stored key, collected depth-first.
    ///
    /// Order across siblings is unspecified.
    pub fn get_all_keys(&self) -> Vec<Vec<u8>> {
        let inner = self.inner.read();
        let keys = traversal::collect_keys(&inner.root);
        debug!(count = keys.len(), "Collected all trie keys");
        keys
    }

    /// Returns every stored value, collected breadth-first.
    ///
    /// The order does not necessarily correspond to [`get_all_keys`](Self::get_all_keys).
    pub fn get_all_values(&self) -> Vec<Vec<u8>> {
        let inner = self.inner.read();
        let values = traversal::collect_values(&inner.root);
        debug!(count = values.len(), "Collected all trie values");
        values
    }

    /// Returns the stored keys starting with `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to match. An empty prefix matches nothing.
    ///
    /// # Returns
    ///
    /// Full keys, matched prefix bytes included, in unspecified order.
    pub fn get_prefix_keys<P>(&self, prefix: P) -> Vec<Vec<u8>>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        let inner = self.inner.read();
        let keys = traversal::collect_prefix_keys(&inner.root, prefix);
        debug!(
            prefix_len = prefix.len(),
            count = keys.len(),
            "Collected trie keys by prefix"
        );
        keys
    }

    /// Returns the values whose keys start with `prefix`.
    ///
    /// An empty prefix matches nothing.
    pub fn get_prefix_values<P>(&self, prefix: P) -> Vec<Vec<u8>>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        let inner = self.inner.read();
        let values = traversal::collect_prefix_values(&inner.root, prefix);
        debug!(
            prefix_len = prefix.len(),
            count = values.len(),
            "Collected trie values by prefix"
        );
        values
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NiihauTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NiihauTrie")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for NiihauTrie
where
    K: AsRef<[u8]>,
    V: Into<Vec<u8>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for NiihauTrie
where
    K: AsRef<[u8]>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
