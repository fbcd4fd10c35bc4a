//! Node storage for the prefix trie.
//!
//! Nodes live in a flat arena owned by [`PrefixTrie`](super::PrefixTrie) and
//! refer to their children by [`NodeId`]. Neither type leaves the crate, so
//! callers can only ever hold the trie itself, never an interior node.

use std::collections::HashMap;

/// Index of a node inside the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single character position in the trie.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// Character this node represents; `None` only for the root
    pub(crate) key: Option<char>,

    /// Whether the path from the root to this node spells an inserted word
    pub(crate) is_end_of_word: bool,

    /// Children keyed by their exact (case-preserved) character
    pub(crate) children: HashMap<char, NodeId>,
}

impl TrieNode {
    /// Creates the root sentinel.
    pub(crate) fn root() -> Self {
        Self {
            key: None,
            is_end_of_word: false,
            children: HashMap::new(),
        }
    }

    /// Creates an empty node for `key`.
    pub(crate) fn with_key(key: char) -> Self {
        Self {
            key: Some(key),
            is_end_of_word: false,
            children: HashMap::new(),
        }
    }

    /// Child stored under exactly `key`.
    pub(crate) fn child(&self, key: char) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    /// Child for `key`, trying the exact character, then its uppercase and
    /// lowercase forms. Case mappings that expand to several characters are
    /// not single keys and are skipped.
    pub(crate) fn child_ignore_case(&self, key: char) -> Option<NodeId> {
        self.child(key)
            .or_else(|| single_char(key.to_uppercase()).and_then(|upper| self.child(upper)))
            .or_else(|| single_char(key.to_lowercase()).and_then(|lower| self.child(lower)))
    }

    /// Rough heap footprint of this node's child map.
    pub(crate) fn heap_bytes(&self) -> usize {
        self.children.capacity() * (std::mem::size_of::<char>() + std::mem::size_of::<NodeId>())
    }
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
