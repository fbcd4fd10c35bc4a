//! Line collector that folds raw dictionary lines into a [`PrefixTrie`].

use super::PrefixTrie;

/// Builds a [`PrefixTrie`] from raw lines.
///
/// Each line is trimmed; empty results are skipped and everything else is
/// inserted as one word. Comment lines (`#...`) can optionally be skipped.
#[derive(Debug, Default)]
pub struct WordCollector {
    trie: PrefixTrie,
    skip_comments: bool,
    lines: usize,
    skipped: usize,
    duplicates: usize,
}

impl WordCollector {
    /// Creates a collector around an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether lines starting with `#` (after trimming) are ignored.
    pub fn skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Trims `line` and inserts it.
    ///
    /// # Returns
    ///
    /// `true` if a new word was added.
    pub fn push_line<L>(&mut self, line: L) -> bool
    where
        L: AsRef<str>,
    {
        self.lines += 1;
        let word = line.as_ref().trim();

        if word.is_empty() || (self.skip_comments && word.starts_with('#')) {
            self.skipped += 1;
            return false;
        }

        let inserted = self.trie.insert(word);
        if !inserted {
            self.duplicates += 1;
        }
        inserted
    }

    /// Number of lines seen so far.
    pub fn lines_seen(&self) -> usize {
        self.lines
    }

    /// Number of blank or comment lines ignored.
    pub fn lines_skipped(&self) -> usize {
        self.skipped
    }

    /// Number of lines that repeated an earlier word.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Consumes the collector and returns the built trie.
    pub fn finish(self) -> PrefixTrie {
        self.trie
    }
}

impl<S> Extend<S> for WordCollector
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.push_line(line);
        }
    }
}

impl<S> FromIterator<S> for WordCollector
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut collector = Self::new();
        collector.extend(iter);
        collector
    }
}
