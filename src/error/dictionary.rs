//! Dictionary error module.
//!
//! Errors raised while reading a word list from disk. Building the trie
//! itself never fails; only the I/O around it can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file does not exist.
    #[error("Dictionary file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The dictionary file exists but could not be read.
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Read {
        /// Path of the dictionary being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A line in the dictionary is not valid UTF-8.
    #[error("Dictionary {} contains invalid UTF-8 on line {line}", path.display())]
    InvalidUtf8 {
        /// Path of the dictionary being read
        path: PathBuf,
        /// 1-based line number of the offending line
        line: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::NotFound(PathBuf::from("words.txt"));
        assert_eq!(err.to_string(), "Dictionary file not found: words.txt");

        let err = DictionaryError::InvalidUtf8 {
            path: PathBuf::from("words.txt"),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Dictionary words.txt contains invalid UTF-8 on line 7"
        );

        let err = DictionaryError::Read {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read dictionary words.txt: denied");
    }
}
