//! Integration tests for the prefix trie through the public library API.

use std::io::Write;
use std::sync::{Arc, Barrier};
use std::thread;

use ipu_lib::bench::{run_benchmark, QueryKind};
use ipu_lib::config::query::BenchConfig;
use ipu_lib::data_structures::{PrefixTrie, WordCollector};
use ipu_lib::dictionary::DictionaryLoader;

const WORDS: &[&str] = &[
    "Bite", "Bites", "Bird", "birch", "biscuit", "Bismuth", "bit", "bitter", "blue", "blunder",
];

#[test]
fn test_build_from_file_and_query() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in WORDS {
        writeln!(file, "  {word}  ").unwrap();
    }
    writeln!(file).unwrap();
    file.flush().unwrap();

    let trie = DictionaryLoader::new(file.path()).load().unwrap();

    assert_eq!(trie.len(), WORDS.len());
    assert_eq!(trie.completions("Bit"), vec!["e", "es"]);
    assert_eq!(trie.completions("bit"), vec!["ter"]);
    assert_eq!(trie.search("bL"), vec!["bLue", "bLunder"]);
    assert_eq!(trie.completions("BI"), vec!["rd", "smuth", "te", "tes"]);
    assert!(trie.completions("b").is_empty());
}

#[test]
fn test_collector_and_from_iterator_agree() {
    let mut collector = WordCollector::new();
    collector.extend(WORDS.iter().copied());
    let collected = collector.finish();

    let direct: PrefixTrie = WORDS.iter().collect();

    for prefix in ["bi", "Bi", "bis", "blu", "zz"] {
        assert_eq!(collected.completions(prefix), direct.completions(prefix));
        assert_eq!(collected.search(prefix), direct.search(prefix));
    }
}

/// A built trie is shared read-only across threads with no locking.
#[test]
fn test_concurrent_readers() {
    const THREAD_COUNT: usize = 8;
    const QUERIES_PER_THREAD: usize = 200;

    let trie: Arc<PrefixTrie> = Arc::new(WORDS.iter().collect());
    let expected = trie.completions("bi");
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let trie = Arc::clone(&trie);
            let barrier = Arc::clone(&barrier);
            let expected = expected.clone();

            thread::spawn(move || {
                barrier.wait();
                for _ in 0..QUERIES_PER_THREAD {
                    assert_eq!(trie.completions("bI"), expected);
                }
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        if let Err(e) = handle.join() {
            panic!("Thread {i} panicked: {e:?}");
        }
    }
}

#[test]
fn test_benchmark_report() {
    let trie: PrefixTrie = WORDS.iter().collect();
    let config = BenchConfig {
        iterations: 3,
        warmup_iterations: 0,
    };

    let report = run_benchmark(&trie, QueryKind::Search, "bi", &config);
    assert_eq!(report.results, 4);
    assert_eq!(report.trie.words, WORDS.len());
    assert!(report.trie.max_depth >= "blunder".len());
}
