//! # Concord - Text Concordance Library
//!
//! Concord records every occurrence of each word in a text by its
//! (line, column) position and answers position queries in sorted order.
//! It is built from two pieces:
//!
//! - a generic fixed-capacity hash map with chained collision
//!   resolution ([`ChainedMap`]), and
//! - a word position index built on it ([`WordIndex`]), driven by a
//!   small per-line scanning state machine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use concord::{Config, WordIndex};
//!
//! // Index a file, one line at a time
//! let index = WordIndex::from_path("corpus.txt", &Config::default())?;
//!
//! // Every occurrence of "word", sorted by line then column
//! for position in index.get_index("word") {
//!     println!("{position}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`map`] - Fixed-capacity chained hash map and bucket hash strategies
//! - [`text`] - Line scanning and tokenization
//! - [`index`] - The word position index
//! - [`config`] - Table and tokenizer configuration
//! - [`error`] - Error types
//!
//! ## Design Notes
//!
//! The table's bucket count is fixed at construction and never resized;
//! chains simply grow as the load factor climbs. Lookups through
//! [`ChainedMap::find`] never mutate the map; call sites that want an
//! entry created on a miss opt in through
//! [`ChainedMap::get_or_insert_default`]. Word matching is exact-bytes
//! and case-sensitive, with single-byte ASCII classification.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod index;
pub mod map;
pub mod text;

// Re-export commonly used types
pub use config::{Config, PunctuationMode, TableConfig, TokenizerConfig};
pub use error::{ConcordError, Result};
pub use index::{Dictionary, Position, WordIndex};
pub use map::{BucketHash, ChainedMap, Djb2Hash, MapStats};
pub use text::{LineScanner, Token};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bucket count for the fixed-capacity table.
pub const DEFAULT_BUCKET_COUNT: usize = 101;
