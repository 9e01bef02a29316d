//! Jam - a lexical analyzer for a small C-like language.
//!
//! The core is the [`lexer`] module: a single-pass [`lexer::Scanner`] that
//! turns a source buffer into a [`lexer::TokenStream`] with end-of-lexeme
//! source locations. The [`driver`] and [`repl`] modules consume it from a
//! file or an interactive prompt.

pub mod driver;
pub mod lexer;
pub mod repl;

// Re-export commonly used types
pub use driver::Driver;
pub use lexer::{LexError, Scanner, SourceLocation, Token, TokenKind, TokenStream};
