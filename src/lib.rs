//! Ipu Autocomplete Library
//!
//! Prefix autocompletion over a static word list. The library holds the
//! trie, the dictionary loader that builds it, and the configuration and
//! error plumbing shared with the `ipu` binary.
//!
//! # Example
//!
//! ```
//! use ipu_lib::data_structures::PrefixTrie;
//!
//! let trie: PrefixTrie = ["Bite", "Bites", "Bird"].into_iter().collect();
//! assert_eq!(trie.completions("Bit"), vec!["e", "es"]);
//! assert_eq!(trie.search("bi"), vec!["bird", "bite", "bites"]);
//! ```

pub mod bench;
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
