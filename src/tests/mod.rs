//! Test modules for the Ipu autocomplete crate.
//!
//! Unit tests live next to the code they cover; the suites here exercise
//! modules together:
//! - Configuration loading and validation
//! - Error display and reporting
//! - Dictionary loading from files on disk
//! - Property-based tests of the trie using proptest

pub mod error_tests;
pub mod prefix_trie_tests;

pub use test_utils::{
    create_test_dir, dictionary_strategy, prefix_strategy, word_strategy, TestFixture,
};
