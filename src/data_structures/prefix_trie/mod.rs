//! Prefix Trie Implementation
//!
//! A character trie over a static word list with case-insensitive prefix
//! queries. Nodes are kept in an arena and linked by index, so insertion
//! mutates in place and never copies a path.
//!
//! The trie is built first and queried afterwards. `insert` needs `&mut self`
//! while queries only need `&self`, so a finished trie can be shared across
//! threads (for example behind an `Arc`) without any locking.

mod collector;
mod node;

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace};

pub use collector::WordCollector;
use node::{NodeId, TrieNode};

/// Prefixes shorter than this many characters yield no results.
pub const MIN_PREFIX_CHARS: usize = 2;

/// Summary figures for a built trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Number of distinct words inserted
    pub words: usize,

    /// Number of nodes, excluding the root
    pub nodes: usize,

    /// Length in characters of the longest path
    pub max_depth: usize,

    /// Approximate heap usage of the arena and child maps
    pub approx_heap_bytes: usize,
}

/// Prefix tree over a word list.
///
/// Key features:
/// * Words are stored with their original casing
/// * Prefix lookup tries each character exactly, then upper-, then lowercased
/// * Results come back sorted
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    /// Node arena; slot 0 is the root
    nodes: Vec<TrieNode>,

    /// Number of distinct words inserted
    words: usize,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            words: 0,
        }
    }

    /// Creates an empty trie with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.saturating_add(1));
        arena.push(TrieNode::root());
        Self {
            nodes: arena,
            words: 0,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Characters are stored exactly as given. Inserting an empty string
    /// leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before, `false` if it was already
    /// there or `word` is empty.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = match self.node(current).child(c) {
                Some(next) => next,
                None => self.push_child(current, c),
            };
        }

        let node = self.node_mut(current);
        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.words += 1;
        }

        is_new
    }

    /// Returns the suffixes that complete `prefix` into inserted words.
    ///
    /// The prefix itself is never part of the result, even when it is a
    /// word on its own. Prefixes shorter than [`MIN_PREFIX_CHARS`] and
    /// prefixes that match nothing both give an empty vector.
    pub fn completions<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.walk_prefix(prefix.as_ref(), false)
    }

    /// Returns the full words starting with `prefix`.
    ///
    /// Each result is `prefix`, as the caller typed it, followed by the
    /// matching suffix. Same short-prefix policy as [`completions`](Self::completions).
    pub fn search<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.walk_prefix(prefix.as_ref(), true)
    }

    /// Checks whether `word` was inserted, matching case the same way
    /// prefix queries do.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        !word.is_empty()
            && self
                .descend(word)
                .is_some_and(|id| self.node(id).is_end_of_word)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Computes size and depth figures for the trie.
    ///
    /// This walks every node, so it is O(n).
    pub fn stats(&self) -> TrieStats {
        let mut max_depth = 0;
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(
                self.node(id)
                    .children
                    .values()
                    .map(|&child| (child, depth + 1)),
            );
        }

        let approx_heap_bytes = self.nodes.capacity() * std::mem::size_of::<TrieNode>()
            + self.nodes.iter().map(TrieNode::heap_bytes).sum::<usize>();

        TrieStats {
            words: self.words,
            nodes: self.node_count(),
            max_depth,
            approx_heap_bytes,
        }
    }

    /// Walks from the root along `prefix`, one character at a time.
    fn descend(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(NodeId::ROOT, |id, c| self.node(id).child_ignore_case(c))
    }

    /// Worklist enumeration shared by `completions` and `search`.
    fn walk_prefix(&self, prefix: &str, include_prefix: bool) -> Vec<String> {
        if prefix.chars().take(MIN_PREFIX_CHARS).count() < MIN_PREFIX_CHARS {
            trace!(prefix, "Prefix too short");
            return Vec::new();
        }

        let Some(start) = self.descend(prefix) else {
            debug!(prefix, "Prefix not found");
            return Vec::new();
        };

        let seed = if include_prefix {
            prefix.to_owned()
        } else {
            String::new()
        };

        let mut worklist: VecDeque<(NodeId, String)> = self
            .node(start)
            .children
            .values()
            .map(|&child| (child, seed.clone()))
            .collect();

        let mut results = Vec::new();
        while let Some((id, mut accumulated)) = worklist.pop_front() {
            let node = self.node(id);
            if let Some(key) = node.key {
                accumulated.push(key);
            }
            if node.is_end_of_word {
                results.push(accumulated.clone());
            }
            worklist.extend(
                node.children
                    .values()
                    .map(|&child| (child, accumulated.clone())),
            );
        }

        results.sort_unstable();
        debug!(prefix, include_prefix, results = results.len(), "Prefix query");
        results
    }

    fn push_child(&mut self, parent: NodeId, key: char) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::with_key(key));
        self.node_mut(parent).children.insert(key, id);
        id
    }

    // Ids are only minted by `push_child`, so indexing cannot go out of bounds.
    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for PrefixTrie
where
    S: AsRef<str>,
{
    /// Builds a trie from raw lines, trimming each and skipping blanks.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().collect::<WordCollector>().finish()
    }
}

impl<S> Extend<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.insert(line.as_ref().trim());
        }
    }
}
