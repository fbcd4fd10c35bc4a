//! Timing harness behind the CLI `--bench` flag.
//!
//! Runs one query repeatedly against a built trie and reports per-query
//! timings alongside the trie's size figures. The criterion suite under
//! `benches/` covers the statistically careful measurements.

use std::fmt::{Display, Formatter};
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::query::BenchConfig;
use crate::data_structures::{PrefixTrie, TrieStats};

/// The two query operations exposed by the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Suffix completions
    Complete,
    /// Full matching words
    Search,
}

impl QueryKind {
    /// Runs this query against `trie`.
    pub fn run(self, trie: &PrefixTrie, prefix: &str) -> Vec<String> {
        match self {
            Self::Complete => trie.completions(prefix),
            Self::Search => trie.search(prefix),
        }
    }
}

/// Outcome of a benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Which query was timed
    pub kind: QueryKind,
    /// Prefix that was queried
    pub prefix: String,
    /// Timed iterations
    pub iterations: u32,
    /// Results returned by a single query
    pub results: usize,
    /// Time spent building the trie, when known
    pub build_ms: Option<f64>,
    /// Total time over all timed iterations
    pub total_ms: f64,
    /// Mean time per query
    pub mean_us: f64,
    /// Fastest query
    pub min_us: f64,
    /// Slowest query
    pub max_us: f64,
    /// Size figures of the queried trie
    pub trie: TrieStats,
}

impl BenchReport {
    /// Records how long the trie took to build.
    pub fn with_build_time(mut self, elapsed: Duration) -> Self {
        self.build_ms = Some(millis(elapsed));
        self
    }
}

impl Display for BenchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "query:        {:?} {:?}", self.kind, self.prefix)?;
        writeln!(f, "results:      {}", self.results)?;
        if let Some(build_ms) = self.build_ms {
            writeln!(f, "build:        {build_ms:.3} ms")?;
        }
        writeln!(f, "iterations:   {}", self.iterations)?;
        writeln!(f, "total:        {:.3} ms", self.total_ms)?;
        writeln!(f, "mean:         {:.3} us", self.mean_us)?;
        writeln!(f, "min / max:    {:.3} / {:.3} us", self.min_us, self.max_us)?;
        writeln!(f, "words:        {}", self.trie.words)?;
        writeln!(f, "nodes:        {}", self.trie.nodes)?;
        writeln!(f, "max depth:    {}", self.trie.max_depth)?;
        write!(
            f,
            "memory:       ~{:.1} KiB",
            self.trie.approx_heap_bytes as f64 / 1024.0
        )
    }
}

/// Times `kind` for `prefix` against `trie`.
pub fn run_benchmark(
    trie: &PrefixTrie,
    kind: QueryKind,
    prefix: &str,
    config: &BenchConfig,
) -> BenchReport {
    for _ in 0..config.warmup_iterations {
        black_box(kind.run(trie, black_box(prefix)));
    }

    let iterations = config.iterations.max(1);
    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut results = 0;

    for _ in 0..iterations {
        let started = Instant::now();
        let found = black_box(kind.run(trie, black_box(prefix)));
        let elapsed = started.elapsed();

        results = found.len();
        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
    }

    tracing::info!(?kind, prefix, iterations, "Benchmark finished");

    BenchReport {
        kind,
        prefix: prefix.to_owned(),
        iterations,
        results,
        build_ms: None,
        total_ms: millis(total),
        mean_us: micros(total) / f64::from(iterations),
        min_us: micros(min),
        max_us: micros(max),
        trie: trie.stats(),
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}
