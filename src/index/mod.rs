//! Word position index built on the chained map.

mod position;

pub use position::Position;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error::{ConcordError, Result};
use crate::map::ChainedMap;
use crate::text::LineScanner;

/// Dictionary mapping each word to the positions it occurs at.
pub type Dictionary = ChainedMap<String, Vec<Position>>;

/// Index of every word occurrence in a text by (line, column).
///
/// Built once from an ordered sequence of lines, then queried. Word
/// matching is exact-bytes and case-sensitive: `"Word"` and `"word"`
/// are distinct entries.
#[derive(Debug, Clone)]
pub struct WordIndex {
    dict: Dictionary,
    lines_scanned: usize,
    tokens_seen: usize,
}

impl WordIndex {
    /// Builds an index from caller-supplied lines with the default
    /// configuration.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines, &Config::default())
    }

    /// Builds an index from caller-supplied lines.
    pub fn from_lines_with<I, S>(lines: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        Ok(Self::build(lines, config))
    }

    // Scans an ordered line sequence; config must already be validated.
    fn build<I, S>(lines: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scanner = LineScanner::new(config.tokenizer.clone());
        let mut index = Self {
            dict: Dictionary::new(config.table.bucket_count),
            lines_scanned: 0,
            tokens_seen: 0,
        };

        for (i, line) in lines.into_iter().enumerate() {
            index.scan_line(&scanner, i + 1, line.as_ref());
        }

        debug!(
            "indexed {} distinct words from {} tokens across {} lines",
            index.dict.len(),
            index.tokens_seen,
            index.lines_scanned
        );
        index
    }

    /// Builds an index by reading lines from `reader`.
    ///
    /// A read failure surfaces as [`ConcordError::Io`] instead of
    /// silently yielding an empty index.
    pub fn from_reader<R: BufRead>(reader: R, config: &Config) -> Result<Self> {
        config.validate()?;

        let scanner = LineScanner::new(config.tokenizer.clone());
        let mut index = Self {
            dict: Dictionary::new(config.table.bucket_count),
            lines_scanned: 0,
            tokens_seen: 0,
        };

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            index.scan_line(&scanner, i + 1, &line);
        }

        debug!(
            "indexed {} distinct words from {} tokens across {} lines",
            index.dict.len(),
            index.tokens_seen,
            index.lines_scanned
        );
        Ok(index)
    }

    /// Builds an index from a text file read line by line.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConcordError::FileNotFound(path.to_path_buf()));
        }

        debug!("indexing file {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }

    fn scan_line(&mut self, scanner: &LineScanner, line_no: usize, line: &str) {
        for token in scanner.scan_line(line_no, line) {
            let position = Position::new(token.line, token.col);
            self.dict.get_or_insert_default(token.text).push(position);
            self.tokens_seen += 1;
        }
        self.lines_scanned = line_no;
    }

    /// Returns every position of `word`, sorted ascending by line and
    /// then column.
    ///
    /// A word that never occurs yields an empty vector; the query does
    /// not mutate the index, so use [`contains_word`](Self::contains_word)
    /// to tell "never indexed" apart from a queried word.
    pub fn get_index(&self, word: &str) -> Vec<Position> {
        let mut positions = self
            .dict
            .find(word)
            .cloned()
            .unwrap_or_default();
        positions.sort_unstable();
        positions
    }

    /// Checks whether `word` occurs anywhere in the indexed text.
    pub fn contains_word(&self, word: &str) -> bool {
        self.dict.contains(word)
    }

    /// Returns the number of distinct words indexed.
    pub fn word_count(&self) -> usize {
        self.dict.len()
    }

    /// Checks whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Iterates over the indexed vocabulary in table order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.dict.iter().map(|(word, _)| word.as_str())
    }

    /// Returns the number of lines consumed while building the index.
    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    /// Returns occupancy statistics of the underlying table.
    pub fn table_stats(&self) -> crate::map::MapStats {
        self.dict.stats()
    }
}
