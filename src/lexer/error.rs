//! Lexical error types.

use thiserror::Error;

/// A fatal scanning error. The scan stops at the first one; the token
/// stream accumulated so far is discarded with the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input reached before a string literal's closing quote.
    /// `line` is the line at the point of failure, after any newlines
    /// embedded in the open literal.
    #[error("Unterminated string literal at line {line}")]
    UnterminatedString { line: usize },

    /// A byte that matches no dispatch rule
    #[error("Invalid character '{character}' at line {line}")]
    InvalidCharacter { character: char, line: usize },
}

impl LexError {
    /// Line number at the point of detection
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line } => *line,
            LexError::InvalidCharacter { line, .. } => *line,
        }
    }
}
