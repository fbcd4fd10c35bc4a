//! Query and benchmark configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Query output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QueryConfig {
    /// Maximum number of results printed per query (0 = unlimited)
    pub max_results: usize,
}

impl QueryConfig {
    /// The effective output limit, `None` meaning unlimited.
    pub fn limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

/// Benchmark run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of timed query iterations
    pub iterations: u32,

    /// Number of untimed iterations run first
    pub warmup_iterations: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            warmup_iterations: 10,
        }
    }
}

impl Validate for BenchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.iterations == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "bench.iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
