//! Data structures for the Ipu autocomplete crate.

pub mod prefix_trie;

pub use prefix_trie::{PrefixTrie, TrieStats, WordCollector, MIN_PREFIX_CHARS};
