//! Lexical scanner for Jot source text.
//!
//! The scanner converts raw source text into a lazy sequence of [`Token`]s.
//! It owns no tree state: the parser pulls tokens one at a time through
//! [`Scanner::next_token`], and each token borrows its lexeme straight out of
//! the source buffer. The cursor advances monotonically and never rewinds.
//!
//! Comments (`// ...` and `/* ... */`) and whitespace are skipped between
//! tokens. Line and column counters are 1-based and advance as the cursor
//! moves, so every token and every error knows where it came from.
//!
//! ## Examples
//!
//! ```rust
//! use jot_format::scanner::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("{count: 0xFF} // config");
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::LeftBrace);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Colon);
//!
//! let number = scanner.next_token().unwrap();
//! assert_eq!(number.kind, TokenKind::Number);
//! assert_eq!(number.text, "0xFF");
//! ```

use crate::{Error, Result};
use std::fmt;

/// The closed set of lexical classes a token can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    String,
    Number,
    True,
    False,
    Null,
    Undefined,
    Infinity,
    NaN,
    Identifier,
    TypeHint,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Undefined => "`undefined`",
            TokenKind::Infinity => "`Infinity`",
            TokenKind::NaN => "`NaN`",
            TokenKind::Identifier => "identifier",
            TokenKind::TypeHint => "type hint",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit: its kind, its raw lexeme, and where it starts.
///
/// The lexeme borrows from the source buffer, so a token never outlives the
/// text it was scanned from. String lexemes include their delimiters; the
/// parser is responsible for stripping them and resolving escapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: usize,
    pub column: usize,
}

/// A single-pass lexical scanner over one source buffer.
///
/// Once the input is exhausted, [`Scanner::next_token`] keeps returning
/// [`TokenKind::EndOfInput`] forever.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current position of the cursor, for diagnostics.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    /// Advances the cursor by one byte, maintaining the line/column counters.
    #[inline]
    fn bump(&mut self) {
        if let Some(b) = self.peek() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Skips whitespace and comments until the next token boundary.
    ///
    /// A block comment that is still open at end of input silently ends
    /// there; the next call will report `EndOfInput`.
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => self.bump(),
                Some(b'/') => match self.peek_at(1) {
                    Some(b'/') => {
                        while let Some(b) = self.peek() {
                            if b == b'\n' {
                                break;
                            }
                            self.bump();
                        }
                    }
                    Some(b'*') => {
                        self.bump();
                        self.bump();
                        while !self.at_end() {
                            if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                                self.bump();
                                self.bump();
                                break;
                            }
                            self.bump();
                        }
                    }
                    _ => {
                        return Err(Error::unexpected_character('/', self.line, self.column));
                    }
                },
                _ => return Ok(()),
            }
        }
    }

    /// Returns the next token, or `EndOfInput` forever once the source is
    /// exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_trivia()?;

        let line = self.line;
        let column = self.column;
        let start = self.pos;

        let Some(b) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::EndOfInput,
                text: &self.source[start..start],
                line,
                column,
            });
        };

        let kind = match b {
            b'{' => {
                self.bump();
                TokenKind::LeftBrace
            }
            b'}' => {
                self.bump();
                TokenKind::RightBrace
            }
            b'[' => {
                self.bump();
                TokenKind::LeftBracket
            }
            b']' => {
                self.bump();
                TokenKind::RightBracket
            }
            b':' => {
                self.bump();
                TokenKind::Colon
            }
            b',' => {
                self.bump();
                TokenKind::Comma
            }
            b'"' if self.peek_at(1) == Some(b'"') && self.peek_at(2) == Some(b'"') => {
                self.scan_multiline_string(line, column)?
            }
            b'"' | b'\'' => self.scan_string(b, line, column)?,
            b'@' => self.scan_type_hint(),
            b'0'..=b'9' => self.scan_number(),
            b'-' => {
                if self.source[self.pos + 1..].starts_with("Infinity") {
                    self.bump();
                    for _ in 0.."Infinity".len() {
                        self.bump();
                    }
                    TokenKind::Infinity
                } else if matches!(self.peek_at(1), Some(b'0'..=b'9')) {
                    self.bump();
                    self.scan_number()
                } else {
                    return Err(Error::unexpected_character('-', line, column));
                }
            }
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => self.scan_word(start),
            _ => {
                // Decode the full character for the diagnostic
                let ch = self.source[self.pos..].chars().next().unwrap_or('\u{FFFD}');
                return Err(Error::unexpected_character(ch, line, column));
            }
        };

        Ok(Token {
            kind,
            text: &self.source[start..self.pos],
            line,
            column,
        })
    }

    /// Scans a single-line string delimited by `quote`.
    ///
    /// A backslash unconditionally consumes the following byte; which escape
    /// sequences are meaningful is the parser's concern. A literal newline
    /// before the closing quote is fatal.
    fn scan_string(&mut self, quote: u8, line: usize, column: usize) -> Result<TokenKind> {
        self.bump();
        loop {
            match self.peek() {
                None => return Err(Error::unterminated_string(line, column)),
                Some(b'\n') => return Err(Error::unterminated_string(line, column)),
                Some(b'\\') => {
                    self.bump();
                    if self.at_end() {
                        return Err(Error::unterminated_string(line, column));
                    }
                    self.bump();
                }
                Some(b) if b == quote => {
                    self.bump();
                    return Ok(TokenKind::String);
                }
                Some(_) => self.bump(),
            }
        }
    }

    /// Scans a triple-quoted multiline string.
    ///
    /// Interior bytes, embedded newlines included, are kept verbatim; there
    /// is no escape processing inside the delimiters.
    fn scan_multiline_string(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        self.bump();
        self.bump();
        self.bump();
        loop {
            if self.at_end() {
                return Err(Error::unterminated_string(line, column));
            }
            if self.peek() == Some(b'"')
                && self.peek_at(1) == Some(b'"')
                && self.peek_at(2) == Some(b'"')
            {
                self.bump();
                self.bump();
                self.bump();
                return Ok(TokenKind::String);
            }
            self.bump();
        }
    }

    /// Scans a `@hint` annotation: `@` followed by alphanumerics,
    /// underscores, and square brackets. The hint's concrete grammar is not
    /// otherwise validated.
    fn scan_type_hint(&mut self) -> TokenKind {
        self.bump();
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'[' || b == b']' {
                self.bump();
            } else {
                break;
            }
        }
        TokenKind::TypeHint
    }

    /// Scans a numeric literal, leaving interpretation to the parser.
    ///
    /// Detects `0x`/`0X` and `0b`/`0B` prefixes; otherwise consumes decimal
    /// digits with an optional fraction and exponent. The decimal point and
    /// exponent marker are only recognized when actual digits follow, so
    /// `1.` stops after the `1`.
    fn scan_number(&mut self) -> TokenKind {
        if self.peek() == Some(b'0') {
            match self.peek_at(1) {
                Some(b'x') | Some(b'X') => {
                    self.bump();
                    self.bump();
                    while matches!(self.peek(), Some(b) if b.is_ascii_hexdigit()) {
                        self.bump();
                    }
                    return TokenKind::Number;
                }
                Some(b'b') | Some(b'B') => {
                    self.bump();
                    self.bump();
                    while matches!(self.peek(), Some(b'0') | Some(b'1')) {
                        self.bump();
                    }
                    return TokenKind::Number;
                }
                _ => {}
            }
        }

        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.bump();
        }

        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b) if b.is_ascii_digit()) {
            self.bump();
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.bump();
            }
        }

        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let after_sign = match self.peek_at(1) {
                Some(b'+') | Some(b'-') => 2,
                _ => 1,
            };
            if matches!(self.peek_at(after_sign), Some(b) if b.is_ascii_digit()) {
                for _ in 0..after_sign {
                    self.bump();
                }
                while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                    self.bump();
                }
            }
        }

        TokenKind::Number
    }

    /// Scans a maximal identifier run and classifies it against the keyword
    /// set. Case-sensitive exact matches only; anything else is a generic
    /// identifier usable as an unquoted object key.
    fn scan_word(&mut self, start: usize) -> TokenKind {
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.bump();
            } else {
                break;
            }
        }
        match &self.source[start..self.pos] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            "undefined" => TokenKind::Undefined,
            "Infinity" => TokenKind::Infinity,
            "NaN" => TokenKind::NaN,
            _ => TokenKind::Identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(source);
        let mut out = Vec::new();
        loop {
            let token = scanner.next_token().unwrap();
            let kind = token.kind;
            out.push(kind);
            if kind == TokenKind::EndOfInput {
                return out;
            }
        }
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{}[]:,"),
            vec![
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("true false null undefined Infinity NaN other _x"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Undefined,
                TokenKind::Infinity,
                TokenKind::NaN,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
        // Case-sensitive: `TRUE` is just an identifier
        assert_eq!(
            kinds("TRUE"),
            vec![TokenKind::Identifier, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_number_lexemes() {
        let mut scanner = Scanner::new("42 -17 3.5 1e10 2.5e-3 0xFF 0b1010 1.");
        let expected = ["42", "-17", "3.5", "1e10", "2.5e-3", "0xFF", "0b1010", "1"];
        for lexeme in expected {
            let token = scanner.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Number, "lexeme {lexeme}");
            assert_eq!(token.text, lexeme);
        }
        // The dangling `.` after `1` is not part of any number
        assert!(scanner.next_token().is_err());
    }

    #[test]
    fn test_negative_infinity_lexeme() {
        let mut scanner = Scanner::new("-Infinity");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Infinity);
        assert_eq!(token.text, "-Infinity");
    }

    #[test]
    fn test_dash_without_digit_is_error() {
        let mut scanner = Scanner::new("- 5");
        assert!(matches!(
            scanner.next_token(),
            Err(Error::UnexpectedCharacter { ch: '-', .. })
        ));
    }

    #[test]
    fn test_string_lexeme_keeps_delimiters() {
        let mut scanner = Scanner::new(r#""hello" 'world'"#);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "\"hello\"");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.text, "'world'");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let mut scanner = Scanner::new(r#""a\"b""#);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.text, r#""a\"b""#);
    }

    #[test]
    fn test_multiline_string() {
        let mut scanner = Scanner::new("\"\"\"line one\nline two\"\"\" ,");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "\"\"\"line one\nline two\"\"\"");
        // Line counter advanced past the embedded newline
        let comma = scanner.next_token().unwrap();
        assert_eq!(comma.line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = Scanner::new("\"no close");
        assert!(matches!(
            scanner.next_token(),
            Err(Error::UnterminatedString { .. })
        ));

        let mut scanner = Scanner::new("\"newline\nbefore close\"");
        assert!(matches!(
            scanner.next_token(),
            Err(Error::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_type_hint() {
        let mut scanner = Scanner::new("@i32 @[string]");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::TypeHint);
        assert_eq!(token.text, "@i32");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.text, "@[string]");
    }

    #[test]
    fn test_comments_are_trivia() {
        assert_eq!(
            kinds("// leading\n1 /* in the\nmiddle */ 2"),
            vec![TokenKind::Number, TokenKind::Number, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_silent() {
        assert_eq!(kinds("1 /* never closed"), vec![
            TokenKind::Number,
            TokenKind::EndOfInput
        ]);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut scanner = Scanner::new("{\n  key: 1\n}");
        let brace = scanner.next_token().unwrap();
        assert_eq!((brace.line, brace.column), (1, 1));
        let key = scanner.next_token().unwrap();
        assert_eq!((key.line, key.column), (2, 3));
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut scanner = Scanner::new("  ");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_unexpected_character() {
        let mut scanner = Scanner::new("$");
        assert!(matches!(
            scanner.next_token(),
            Err(Error::UnexpectedCharacter { ch: '$', .. })
        ));
    }
}
