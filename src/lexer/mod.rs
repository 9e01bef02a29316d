//! Lexer module for tokenizing Jam source code.

mod error;
mod scanner;
mod token;

pub use error::LexError;
pub use scanner::Scanner;
pub use token::{lookup_keyword, LexedToken, SourceLocation, Token, TokenKind, TokenStream};
