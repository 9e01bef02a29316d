//! Driver that runs a scan over a whole source buffer and renders the
//! resulting tokens.

use std::fmt::Write;

use crate::lexer::{LexError, Scanner, TokenStream};

/// The file-mode driver: owns one source buffer, produces one token listing
pub struct Driver {
    source: String,
}

impl Driver {
    pub fn new(source: String) -> Self {
        Self { source }
    }

    /// Scan the source and render every token, one per line.
    ///
    /// On a scan error nothing is rendered; the caller must not present
    /// partial output as complete.
    pub fn run(&self) -> Result<String, LexError> {
        let stream = Scanner::new(&self.source).scan()?;
        Ok(render_tokens(&stream))
    }
}

/// Render a token stream in the fixed display format shared by the file
/// driver and the REPL:
/// `Token: <lexeme-or-kind-name> (Type: <kind name>, Line: <l>, Column: <c>)`
pub fn render_tokens(stream: &TokenStream) -> String {
    let mut out = String::new();
    for entry in stream {
        let kind = entry.token.kind;
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "Token: {} (Type: {}, Line: {}, Column: {})",
            entry.token.lexeme().unwrap_or_else(|| kind.name()),
            kind.name(),
            entry.location.line,
            entry.location.column,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn run_renders_one_line_per_token() {
        let driver = Driver::new("while (x) { y; }".to_string());
        let listing = driver.run().expect("scan should succeed");
        let lines: Vec<&str> = listing.lines().collect();
        // 8 tokens plus EOF
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Token: while (Type: While Keyword, Line: 1, Column: 5)");
        assert_eq!(lines[8], "Token: EOF (Type: EOF, Line: 1, Column: 16)");
    }

    #[test]
    fn run_surfaces_the_first_error_with_no_output() {
        let driver = Driver::new("ok $ nope".to_string());
        let err = driver.run().expect_err("scan should fail");
        assert_eq!(
            err,
            LexError::InvalidCharacter {
                character: '$',
                line: 1,
            }
        );
    }

    #[test]
    fn literal_tokens_render_their_payload() {
        let stream = Scanner::new("\"hi\" 42").scan().expect("scan should succeed");
        assert_eq!(stream[0].token.kind, TokenKind::StringLiteral);
        let listing = render_tokens(&stream);
        assert!(listing.contains("Token: hi (Type: String Literal"));
        assert!(listing.contains("Token: 42 (Type: Number Literal"));
    }
}
