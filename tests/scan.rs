//! End-to-end tests over the public lexer API.

use jam::driver::render_tokens;
use jam::{Driver, LexError, Scanner, TokenKind};

#[test]
fn scans_a_small_program() {
    let source = "\
func fib(n) {
  if n < 2 {
    return n;
  }
  return fib(n - 1) + fib(n - 2);
}
";
    let stream = Scanner::new(source).scan().expect("scan should succeed");

    assert_eq!(stream[0].token.kind, TokenKind::Func);
    assert_eq!(stream[1].token.text.as_deref(), Some("fib"));
    assert_eq!(stream.last().map(|e| e.token.kind), Some(TokenKind::Eof));

    // One end-marker, at the very end
    let eof_count = stream
        .iter()
        .filter(|e| e.token.kind == TokenKind::Eof)
        .count();
    assert_eq!(eof_count, 1);
}

#[test]
fn mixed_punctuation_and_namespacing() {
    let stream = Scanner::new("io::print(x);")
        .scan()
        .expect("scan should succeed");
    assert_eq!(
        stream.kinds(),
        vec![
            TokenKind::Identifier,
            TokenKind::ColonColon,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn error_aborts_without_later_tokens() {
    // Nothing after the offending character may be tokenized
    let err = Scanner::new("a ~ b").scan().expect_err("scan should fail");
    assert_eq!(
        err,
        LexError::InvalidCharacter {
            character: '~',
            line: 1,
        }
    );
}

#[test]
fn error_messages_match_the_reporting_format() {
    assert_eq!(
        LexError::UnterminatedString { line: 3 }.to_string(),
        "Unterminated string literal at line 3"
    );
    assert_eq!(
        LexError::InvalidCharacter {
            character: '~',
            line: 1,
        }
        .to_string(),
        "Invalid character '~' at line 1"
    );
}

#[test]
fn driver_listing_has_the_documented_shape() {
    let driver = Driver::new("x = \"ok\" // done".to_string());
    let listing = driver.run().expect("scan should succeed");
    assert_eq!(
        listing,
        "Token: x (Type: Identifier, Line: 1, Column: 1)\n\
         Token: = (Type: Equal, Line: 1, Column: 3)\n\
         Token: ok (Type: String Literal, Line: 1, Column: 8)\n\
         Token: EOF (Type: EOF, Line: 1, Column: 16)\n"
    );
}

#[test]
fn each_line_scans_independently_like_the_repl() {
    // The REPL feeds each line through a fresh scanner, so an unterminated
    // string on one line cannot be closed by the next.
    let first = Scanner::new("\"open").scan();
    assert_eq!(first, Err(LexError::UnterminatedString { line: 1 }));

    let second = Scanner::new("closed\"").scan();
    assert_eq!(second, Err(LexError::UnterminatedString { line: 1 }));
}

#[test]
fn render_skips_nothing_and_invents_nothing() {
    let stream = Scanner::new("1 // comment\n2")
        .scan()
        .expect("scan should succeed");
    let listing = render_tokens(&stream);
    assert_eq!(listing.lines().count(), stream.len());
    assert!(!listing.contains("comment"));
}
