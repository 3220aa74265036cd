//! Enumeration algorithms for the Niihau Byte Trie.
//!
//! Every walk uses an explicit stack or queue, so very long keys cannot exhaust
//! the call stack. The functions borrow the tree immutably; callers hold the
//! trie's read lock for the duration of a walk.

use std::collections::VecDeque;

use super::node::TrieNode;

/// Collects every stored key with a depth-first walk from `root`.
///
/// The root's placeholder symbol is not part of any key, so a value stored on
/// the root itself is reported as the empty key.
pub fn collect_keys(root: &TrieNode) -> Vec<Vec<u8>> {
    let mut keys = Vec::new();
    let mut path = Vec::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        if !node.is_root {
            path.push(node.symbol);
        }

        if node.value.is_some() {
            keys.push(path.clone());
        }

        let child_depth = path.len();
        stack.extend(node.children.values().map(|child| (child, child_depth)));
    }

    keys
}

/// Collects every stored value with a breadth-first walk from `root`.
pub fn collect_values(root: &TrieNode) -> Vec<Vec<u8>> {
    let mut values = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if let Some(value) = &node.value {
            values.push(value.clone());
        }
        queue.extend(node.children.values());
    }

    values
}

/// Decides whether a node is on the prefix path.
///
/// A node matches when the prefix is already exhausted or its symbol equals the
/// prefix byte under the cursor. Returns the cursor its children continue with.
fn on_path(prefix: &[u8], cursor: usize, symbol: u8) -> Option<usize> {
    if cursor == prefix.len() {
        Some(cursor)
    } else if prefix[cursor] == symbol {
        Some(cursor + 1)
    } else {
        None
    }
}

/// Root child the prefix walks start from. `None` for an empty prefix.
fn prefix_start<'a>(root: &'a TrieNode, prefix: &[u8]) -> Option<&'a TrieNode> {
    prefix.first().and_then(|first| root.children.get(first))
}

/// Collects the keys starting with `prefix` using a depth-first walk.
///
/// Reported keys include the matched prefix bytes. An empty prefix yields no
/// keys at all.
pub fn collect_prefix_keys(root: &TrieNode, prefix: &[u8]) -> Vec<Vec<u8>> {
    let mut keys = Vec::new();
    let Some(start) = prefix_start(root, prefix) else {
        return keys;
    };

    let mut path = Vec::with_capacity(prefix.len());
    let mut stack = vec![(start, 0usize, 0usize)];

    while let Some((node, cursor, depth)) = stack.pop() {
        let Some(next_cursor) = on_path(prefix, cursor, node.symbol) else {
            continue;
        };

        path.truncate(depth);
        path.push(node.symbol);

        if node.value.is_some() {
            keys.push(path.clone());
        }

        let child_depth = path.len();
        stack.extend(
            node.children
                .values()
                .map(|child| (child, next_cursor, child_depth)),
        );
    }

    keys
}

/// Collects the values whose keys start with `prefix` using a depth-first walk.
///
/// An empty prefix yields no values at all.
pub fn collect_prefix_values(root: &TrieNode, prefix: &[u8]) -> Vec<Vec<u8>> {
    let mut values = Vec::new();
    let Some(start) = prefix_start(root, prefix) else {
        return values;
    };

    let mut stack = vec![(start, 0usize)];

    while let Some((node, cursor)) = stack.pop() {
        let Some(next_cursor) = on_path(prefix, cursor, node.symbol) else {
            continue;
        };

        if let Some(value) = &node.value {
            values.push(value.clone());
        }

        stack.extend(node.children.values().map(|child| (child, next_cursor)));
    }

    values
}
