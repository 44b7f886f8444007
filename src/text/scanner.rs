//! Line scanner that extracts word tokens with their positions.

use crate::config::{PunctuationMode, TokenizerConfig};

/// A word token with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, a run of alphabetic bytes.
    pub text: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the first character.
    pub col: usize,
}

/// Scanner that walks a line byte by byte and emits word tokens.
///
/// The scanner is a two-state machine: outside a word, an alphabetic
/// byte starts a token and records its (line, column); inside a word,
/// alphabetic bytes accumulate and whitespace flushes the token. Bytes
/// that are neither are handled per [`PunctuationMode`]: elided from the
/// stream without ending the token, or treated as a separator. A token
/// still open at the end of the line is flushed there; tokens never span
/// lines.
///
/// Classification is single-byte ASCII; non-ASCII bytes fall in the
/// punctuation class.
#[derive(Debug, Clone)]
pub struct LineScanner {
    config: TokenizerConfig,
}

impl LineScanner {
    /// Creates a scanner with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Creates a scanner with default configuration.
    pub fn default_config() -> Self {
        Self::new(TokenizerConfig::default())
    }

    /// Scans one line, numbered `line_no` (1-based), and returns its
    /// tokens in order of appearance.
    pub fn scan_line(&self, line_no: usize, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut start_col = 0;

        for (i, byte) in line.bytes().enumerate() {
            let col = i + 1;
            if byte.is_ascii_alphabetic() {
                if word.is_empty() {
                    start_col = col;
                }
                word.push(byte as char);
            } else if byte.is_ascii_whitespace()
                || self.config.punctuation == PunctuationMode::Separate
            {
                Self::flush(&mut tokens, &mut word, line_no, start_col);
            }
            // PunctuationMode::Elide: the byte vanishes without ending
            // the token.
        }
        Self::flush(&mut tokens, &mut word, line_no, start_col);

        tokens
    }

    fn flush(tokens: &mut Vec<Token>, word: &mut String, line: usize, col: usize) {
        if !word.is_empty() {
            tokens.push(Token {
                text: std::mem::take(word),
                line,
                col,
            });
        }
    }
}
