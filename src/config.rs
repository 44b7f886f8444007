//! Configuration for the concord library.

use serde::{Deserialize, Serialize};

use crate::error::{ConcordError, Result};

/// Main configuration for building a word index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hash table configuration.
    pub table: TableConfig,

    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl Config {
    /// Checks the configuration for values that cannot be honored.
    pub fn validate(&self) -> Result<()> {
        if self.table.bucket_count == 0 {
            return Err(ConcordError::Config(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hash table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of buckets in the table, fixed for its whole lifetime.
    /// A prime around 1.3x the expected key count keeps chains short.
    /// Default: 101.
    pub bucket_count: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { bucket_count: 101 }
    }
}

/// Tokenizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// How bytes that are neither alphabetic nor whitespace are handled.
    /// Default: [`PunctuationMode::Elide`].
    pub punctuation: PunctuationMode,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            punctuation: PunctuationMode::Elide,
        }
    }
}

/// Treatment of bytes that are neither alphabetic nor whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationMode {
    /// The byte vanishes from the stream: it is not appended to the token
    /// and does not end one. `"it's"` scans as the single token `its`.
    Elide,

    /// The byte ends an in-progress token, exactly like whitespace.
    /// `"it's"` scans as the two tokens `it` and `s`.
    Separate,
}
