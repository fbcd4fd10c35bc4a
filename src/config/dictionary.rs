//! Dictionary configuration module.
//!
//! Where the word list lives and how its lines are filtered.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to a one-word-per-line text file
    pub path: PathBuf,

    /// Ignore lines whose trimmed form starts with `#`
    pub skip_comments: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("words.txt"),
            skip_comments: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
