//! Node implementation for the Niihau Byte Trie.
//!
//! Nodes are plain records: a transition byte, an optional payload and the
//! table of outgoing transitions. All algorithms live on the trie itself.

use fnv::FnvHashMap;

/// A node in the Niihau Byte Trie.
///
/// Children are owned by value inside their parent's transition table, so every
/// node has exactly one parent and the structure cannot form cycles.
#[derive(Debug)]
pub struct TrieNode {
    /// Byte on the edge leading into this node. Meaningless on the root.
    pub symbol: u8,

    /// Outgoing transitions keyed by the next byte of a key
    pub children: FnvHashMap<u8, TrieNode>,

    /// Payload of the key terminating here, if any.
    ///
    /// `Some(vec![])` is a stored key with an empty value and is distinct from `None`.
    pub value: Option<Vec<u8>>,

    /// Whether this node is the trie's root
    pub is_root: bool,
}

impl TrieNode {
    /// Creates a node reached through `symbol`.
    pub fn new(symbol: u8) -> Self {
        Self {
            symbol,
            children: FnvHashMap::default(),
            value: None,
            is_root: false,
        }
    }

    /// Creates the root node. Its symbol is a placeholder.
    pub fn root() -> Self {
        Self {
            symbol: 0,
            children: FnvHashMap::default(),
            value: None,
            is_root: true,
        }
    }

    /// Follows the path spelled by `key` without creating anything.
    pub fn descend(&self, key: &[u8]) -> Option<&TrieNode> {
        key.iter()
            .try_fold(self, |node, symbol| node.children.get(symbol))
    }

    /// Follows the path spelled by `key`, creating missing nodes.
    ///
    /// Returns the terminal node and how many nodes were created on the way.
    pub fn descend_or_create(&mut self, key: &[u8]) -> (&mut TrieNode, usize) {
        let mut created = 0;
        let mut node = self;
        for &symbol in key {
            node = node.children.entry(symbol).or_insert_with(|| {
                created += 1;
                TrieNode::new(symbol)
            });
        }
        (node, created)
    }
}

// Tear down iteratively; the default drop recurses once per key byte.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}
