//! Property-based tests for the prefix trie.

use crate::data_structures::{PrefixTrie, MIN_PREFIX_CHARS};
use crate::tests::{dictionary_strategy, prefix_strategy, word_strategy};
use proptest::prelude::*;
use std::collections::HashSet;

fn build(words: &[String]) -> PrefixTrie {
    let mut trie = PrefixTrie::new();
    for word in words {
        trie.insert(word);
    }
    trie
}

/// Case-insensitive view of the inserted words, used to check for ghosts.
fn folded(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

proptest! {
    // Property: every word longer than the minimum prefix is found again
    // through its own leading characters
    #[test]
    fn prop_search_finds_inserted_word(words in proptest::collection::vec(word_strategy(), 1..30)) {
        let trie = build(&words);

        for word in words.iter().filter(|w| w.chars().count() > MIN_PREFIX_CHARS) {
            let prefix: String = word.chars().take(MIN_PREFIX_CHARS).collect();
            let results = trie.search(&prefix);
            prop_assert!(results.contains(word), "{} missing from {:?}", word, results);
        }
    }

    // Property: search results are exactly the prefix followed by each completion
    #[test]
    fn prop_completions_match_search(words in dictionary_strategy(), prefix in prefix_strategy()) {
        let trie = build(&words);

        let mut joined: Vec<String> = trie
            .completions(&prefix)
            .into_iter()
            .map(|suffix| format!("{prefix}{suffix}"))
            .collect();
        joined.sort();

        prop_assert_eq!(joined, trie.search(&prefix));
    }

    // Property: prefixes shorter than two characters never produce results
    #[test]
    fn prop_short_prefix_is_empty(words in dictionary_strategy(), prefix in r"[abcABC]?") {
        let trie = build(&words);

        prop_assert!(trie.completions(&prefix).is_empty());
        prop_assert!(trie.search(&prefix).is_empty());
    }

    // Property: every search result corresponds to an inserted word
    #[test]
    fn prop_no_ghost_words(words in dictionary_strategy(), prefix in prefix_strategy()) {
        let trie = build(&words);
        let known = folded(&words);

        for word in trie.search(&prefix) {
            prop_assert!(known.contains(&word.to_lowercase()), "ghost word {}", word);
        }
    }

    // Property: the casing of a lowercase-only dictionary query does not matter
    #[test]
    fn prop_case_insensitive_over_lowercase_dictionary(
        words in proptest::collection::vec(r"[a-z]{1,8}", 0..30),
        prefix in r"[a-z]{2,3}",
    ) {
        let trie = build(&words);
        let expected = trie.completions(&prefix);

        prop_assert_eq!(trie.completions(prefix.to_uppercase()), expected.clone());

        let mixed: String = prefix
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(trie.completions(mixed), expected);
    }

    // Property: inserting the same words again changes nothing
    #[test]
    fn prop_insert_idempotent(words in dictionary_strategy(), prefix in prefix_strategy()) {
        let mut trie = build(&words);
        let before_completions = trie.completions(&prefix);
        let before_len = trie.len();
        let before_nodes = trie.node_count();

        for word in &words {
            prop_assert!(!trie.insert(word));
        }

        prop_assert_eq!(trie.completions(&prefix), before_completions);
        prop_assert_eq!(trie.len(), before_len);
        prop_assert_eq!(trie.node_count(), before_nodes);
    }

    // Property: results never contain duplicates
    #[test]
    fn prop_results_unique(words in dictionary_strategy(), prefix in prefix_strategy()) {
        let trie = build(&words);
        let results = trie.completions(&prefix);
        let unique: HashSet<&String> = results.iter().collect();

        prop_assert_eq!(unique.len(), results.len());
    }
}

/// Bite/Bites/Bird completions and searches compared as sets.
#[test]
fn test_bite_bird_sets() {
    let words: Vec<String> = ["Bite", "Bites", "Bird"].iter().map(|w| w.to_string()).collect();
    let trie = build(&words);

    let set = |v: Vec<String>| v.into_iter().collect::<HashSet<_>>();
    let expected = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<HashSet<_>>();

    assert_eq!(set(trie.completions("Bit")), expected(&["e", "es"]));
    assert_eq!(set(trie.completions("bi")), expected(&["rd", "te", "tes"]));
    assert!(trie.completions("B").is_empty());
    assert_eq!(set(trie.search("bi")), expected(&["bird", "bite", "bites"]));
}
