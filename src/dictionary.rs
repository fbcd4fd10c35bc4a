//! Dictionary loading.
//!
//! Reads a one-word-per-line text source and feeds it through a
//! [`WordCollector`]. This is the only place the crate touches the
//! filesystem for word data.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::{PrefixTrie, WordCollector};
use crate::error::dictionary::DictionaryError;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Loads word lists into a [`PrefixTrie`].
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    path: PathBuf,
    skip_comments: bool,
}

impl DictionaryLoader {
    /// Creates a loader for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            skip_comments: false,
        }
    }

    /// Creates a loader from the `[dictionary]` configuration section.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(&config.path).skip_comments(config.skip_comments)
    }

    /// Sets whether `#` comment lines are ignored.
    pub fn skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file and builds a trie from it.
    pub fn load(&self) -> DictionaryResult<PrefixTrie> {
        let file = File::open(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => DictionaryError::NotFound(self.path.clone()),
            _ => DictionaryError::Read {
                path: self.path.clone(),
                source,
            },
        })?;

        self.load_from_reader(BufReader::new(file))
    }

    /// Builds a trie from any buffered reader.
    ///
    /// Errors are attributed to this loader's path.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> DictionaryResult<PrefixTrie> {
        let started = Instant::now();
        let mut collector = WordCollector::new().skip_comments(self.skip_comments);

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| match source.kind() {
                ErrorKind::InvalidData => DictionaryError::InvalidUtf8 {
                    path: self.path.clone(),
                    line: index + 1,
                },
                _ => DictionaryError::Read {
                    path: self.path.clone(),
                    source,
                },
            })?;
            collector.push_line(line);
        }

        info!(
            path = %self.path.display(),
            lines = collector.lines_seen(),
            skipped = collector.lines_skipped(),
            duplicates = collector.duplicates(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Dictionary loaded"
        );

        Ok(collector.finish())
    }
}
