//! Token definitions for the Jam lexer.

use std::fmt;

/// Position in source text, recorded immediately after a token's lexeme.
///
/// `line` is 1-based; `column` and `offset` are 0-based. `column` is measured
/// in bytes from the start of the current line, `offset` from the start of
/// the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// All token kinds in Jam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Delimiters
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]

    // Punctuation and operators
    Comma,          // ,
    Colon,          // :
    ColonColon,     // ::
    Semicolon,      // ;
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Equal,          // =
    Less,           // <
    Greater,        // >
    Period,         // .
    Ampersand,      // &
    Pipe,           // |
    Bang,           // !
    Caret,          // ^
    Percent,        // %

    // Keywords
    If,
    Else,
    While,
    Func,
    Return,

    // Literals
    StringLiteral,
    NumberLiteral,
    Identifier,

    // Special
    Eof,
}

impl TokenKind {
    /// Display name used by the drivers when printing tokens
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "Left Parenthesis",
            TokenKind::RightParen => "Right Parenthesis",
            TokenKind::LeftBrace => "Left Brace",
            TokenKind::RightBrace => "Right Brace",
            TokenKind::LeftBracket => "Left Bracket",
            TokenKind::RightBracket => "Right Bracket",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::ColonColon => "Double Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Equal => "Equal",
            TokenKind::Less => "Less Than",
            TokenKind::Greater => "Greater Than",
            TokenKind::Period => "Period",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::Pipe => "Pipe",
            TokenKind::Bang => "Exclamation",
            TokenKind::Caret => "Caret",
            TokenKind::Percent => "Percent",
            TokenKind::If => "If Keyword",
            TokenKind::Else => "Else Keyword",
            TokenKind::While => "While Keyword",
            TokenKind::Func => "Func Keyword",
            TokenKind::Return => "Return Keyword",
            TokenKind::StringLiteral => "String Literal",
            TokenKind::NumberLiteral => "Number Literal",
            TokenKind::Identifier => "Identifier",
            TokenKind::Eof => "EOF",
        }
    }

    /// The text implied by a fixed-lexeme kind; `None` for literal kinds
    /// and `Eof`, whose text is not determined by the kind alone
    pub fn fixed_lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::ColonColon => Some("::"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Equal => Some("="),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::Period => Some("."),
            TokenKind::Ampersand => Some("&"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Bang => Some("!"),
            TokenKind::Caret => Some("^"),
            TokenKind::Percent => Some("%"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::Func => Some("func"),
            TokenKind::Return => Some("return"),
            TokenKind::StringLiteral
            | TokenKind::NumberLiteral
            | TokenKind::Identifier
            | TokenKind::Eof => None,
        }
    }

    /// Check if this kind carries an owned text payload
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::Identifier
        )
    }
}

/// A token with its kind and, for literal/identifier kinds, its text.
///
/// Invariant: `text` is `Some` exactly when `kind.has_payload()`. The
/// constructors enforce this; fixed-lexeme kinds get their text from the
/// kind tag alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
}

impl Token {
    /// Token for a fixed-lexeme kind (punctuation, keyword, or EOF)
    pub fn new(kind: TokenKind) -> Self {
        debug_assert!(!kind.has_payload());
        Self { kind, text: None }
    }

    /// Token carrying an owned lexeme (string, number, or identifier)
    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        debug_assert!(kind.has_payload());
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    /// The token's text: the payload for literal kinds, the implied
    /// lexeme otherwise. `None` only for `Eof`.
    pub fn lexeme(&self) -> Option<&str> {
        self.text.as_deref().or_else(|| self.kind.fixed_lexeme())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}')", self.kind, self.lexeme().unwrap_or(""))
    }
}

/// Map an identifier's text to its keyword kind, if any
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    match ident {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "func" => Some(TokenKind::Func),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// A scanned token together with its end-of-lexeme location
#[derive(Debug, Clone, PartialEq)]
pub struct LexedToken {
    pub token: Token,
    pub location: SourceLocation,
}

/// Append-only sequence of scanned tokens produced by one scan.
///
/// Tokens and locations live in one record so they can never fall out of
/// alignment. A successful scan always ends with an `Eof` entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    entries: Vec<LexedToken>,
}

impl TokenStream {
    const INITIAL_CAPACITY: usize = 8;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, token: Token, location: SourceLocation) {
        self.entries.push(LexedToken { token, location });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LexedToken> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&LexedToken> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexedToken> {
        self.entries.iter()
    }

    /// Just the token kinds, in order. Convenient for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.entries.iter().map(|e| e.token.kind).collect()
    }
}

impl std::ops::Index<usize> for TokenStream {
    type Output = LexedToken;

    fn index(&self, index: usize) -> &LexedToken {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a LexedToken;
    type IntoIter = std::slice::Iter<'a, LexedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = LexedToken;
    type IntoIter = std::vec::IntoIter<LexedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
