//! Scanner for Jam source code tokenization.

use super::error::LexError;
use super::token::{lookup_keyword, SourceLocation, Token, TokenKind, TokenStream};

/// Scanner that produces a token stream from source code.
///
/// One scanner performs exactly one scan over one immutable source buffer;
/// `scan` consumes it. A single character of lookahead, no backtracking.
pub struct Scanner<'a> {
    source: &'a str,
    current: usize,
    line_start: usize,
    line: usize,
    stream: TokenStream,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            current: 0,
            line_start: 0,
            line: 1,
            stream: TokenStream::new(),
        }
    }

    /// Tokenize the entire source in one left-to-right pass.
    ///
    /// On success the returned stream ends with exactly one `Eof` token.
    /// On failure the partial stream is dropped with the scanner.
    pub fn scan(mut self) -> Result<TokenStream, LexError> {
        while let Some(c) = self.peek() {
            match c {
                // Whitespace carries no token and no line change
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.line_start = self.current;
                }

                // Single-character punctuation
                '(' => self.punctuation(TokenKind::LeftParen),
                ')' => self.punctuation(TokenKind::RightParen),
                '{' => self.punctuation(TokenKind::LeftBrace),
                '}' => self.punctuation(TokenKind::RightBrace),
                '[' => self.punctuation(TokenKind::LeftBracket),
                ']' => self.punctuation(TokenKind::RightBracket),
                ',' => self.punctuation(TokenKind::Comma),
                ';' => self.punctuation(TokenKind::Semicolon),
                '+' => self.punctuation(TokenKind::Plus),
                '-' => self.punctuation(TokenKind::Minus),
                '*' => self.punctuation(TokenKind::Star),
                '=' => self.punctuation(TokenKind::Equal),
                '<' => self.punctuation(TokenKind::Less),
                '>' => self.punctuation(TokenKind::Greater),
                '.' => self.punctuation(TokenKind::Period),
                '&' => self.punctuation(TokenKind::Ampersand),
                '|' => self.punctuation(TokenKind::Pipe),
                '!' => self.punctuation(TokenKind::Bang),
                '^' => self.punctuation(TokenKind::Caret),
                '%' => self.punctuation(TokenKind::Percent),

                // `:` or `::`
                ':' => {
                    self.advance();
                    if self.peek() == Some(':') {
                        self.advance();
                        self.push(Token::new(TokenKind::ColonColon));
                    } else {
                        self.push(Token::new(TokenKind::Colon));
                    }
                }

                // `/` or a `//` line comment
                '/' => {
                    self.advance();
                    if self.peek() == Some('/') {
                        // Discard to end of line; the newline itself is
                        // handled by the main loop.
                        while self.peek().map_or(false, |c| c != '\n') {
                            self.advance();
                        }
                    } else {
                        self.push(Token::new(TokenKind::Slash));
                    }
                }

                '"' => self.scan_string()?,
                '0'..='9' => self.scan_number(),
                c if c.is_ascii_alphabetic() => self.scan_identifier(),

                c => {
                    return Err(LexError::InvalidCharacter {
                        character: c,
                        line: self.line,
                    })
                }
            }
        }

        self.push(Token::new(TokenKind::Eof));
        Ok(self.stream)
    }

    fn peek(&self) -> Option<char> {
        self.source.as_bytes().get(self.current).map(|&b| b as char)
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    /// Emit a single-character token, consuming its character
    fn punctuation(&mut self, kind: TokenKind) {
        self.advance();
        self.push(Token::new(kind));
    }

    /// Record the token at the end-of-lexeme position: line/column/offset
    /// all taken from the cursor after the lexeme was consumed.
    fn push(&mut self, token: Token) {
        let location = SourceLocation {
            line: self.line,
            column: self.current - self.line_start,
            offset: self.current,
        };
        self.stream.push(token, location);
    }

    /// String literal. The payload excludes the delimiting quotes; there is
    /// no escape processing, a backslash is literal text. Embedded newlines
    /// count toward the line number like newlines outside a string.
    fn scan_string(&mut self) -> Result<(), LexError> {
        self.advance(); // opening quote
        let start = self.current;

        loop {
            match self.peek() {
                None => {
                    return Err(LexError::UnterminatedString { line: self.line });
                }
                Some('"') => break,
                Some('\n') => {
                    self.advance();
                    self.line += 1;
                    self.line_start = self.current;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let text = self.source[start..self.current].to_string();
        self.advance(); // closing quote
        self.push(Token::with_text(TokenKind::StringLiteral, text));
        Ok(())
    }

    /// Numeric literal: a maximal digit run, then at most one `.` followed
    /// by a further maximal digit run. A trailing `.` with no digits after
    /// it is a complete number, so `12.` lexes as one token and `12.34.56`
    /// as number, period, number.
    fn scan_number(&mut self) {
        let start = self.current;

        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            self.advance();
            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = self.source[start..self.current].to_string();
        self.push(Token::with_text(TokenKind::NumberLiteral, text));
    }

    /// Identifier or keyword: maximal alphanumeric/underscore run, then a
    /// case-sensitive keyword lookup on the whole run.
    fn scan_identifier(&mut self) {
        let start = self.current;

        while self
            .peek()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.source[start..self.current];
        match lookup_keyword(text) {
            Some(kind) => self.push(Token::new(kind)),
            None => self.push(Token::with_text(TokenKind::Identifier, text.to_string())),
        }
    }
}
