//! Text scanning for word tokens and their positions.

mod scanner;

pub use scanner::{LineScanner, Token};
