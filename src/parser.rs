//! Recursive-descent parser building the value tree.
//!
//! The parser consumes tokens from the [`Scanner`] one at a time with a
//! single token of lookahead and no backtracking, constructing a [`JotValue`]
//! tree. Any grammar violation is terminal: the whole input is rejected and
//! no partial tree is returned.
//!
//! Two guards sit on top of the grammar itself:
//!
//! - after the top-level value, the next token must be end of input, so
//!   trailing garbage is rejected rather than silently ignored;
//! - nesting is bounded by [`MAX_DEPTH`], converting adversarially deep input
//!   into a catchable [`Error::RecursionLimit`] instead of a stack overflow.
//!
//! Type hints (`@i32`, `@[string]`, ...) following a value inside an object
//! member or array element are consumed and discarded; they leave no trace in
//! the tree.
//!
//! ## Examples
//!
//! ```rust
//! use jot_format::from_str;
//!
//! let doc = from_str(r#"
//!     {
//!         // unquoted keys, hex literals, trailing commas
//!         name: 'deep-thought',
//!         answer: 0x2A @u8,
//!     }
//! "#).unwrap();
//!
//! assert_eq!(doc.get("answer").and_then(|v| v.as_i64()), Some(42));
//! ```

use crate::scanner::{Scanner, Token, TokenKind};
use crate::{Error, JotMap, JotValue, Number, Result};

/// Maximum nesting depth of objects and arrays within one document.
pub const MAX_DEPTH: usize = 128;

/// A predictive parser over one source buffer.
///
/// Most callers should use [`crate::from_str`] instead of driving the parser
/// directly.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Option<Token<'a>>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(source),
            lookahead: None,
            depth: 0,
        }
    }

    /// Parses one complete document: a single top-level value followed by
    /// end of input.
    pub fn parse_document(&mut self) -> Result<JotValue> {
        let value = self.parse_value()?;
        let trailing = self.peek()?;
        if trailing.kind != TokenKind::EndOfInput {
            return Err(Error::unexpected_token(
                "end of input",
                trailing.text,
                trailing.line,
                trailing.column,
            ));
        }
        Ok(value)
    }

    fn peek(&mut self) -> Result<Token<'a>> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }
        let token = self.scanner.next_token()?;
        self.lookahead = Some(token);
        Ok(token)
    }

    fn advance(&mut self) -> Result<Token<'a>> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.scanner.next_token(),
        }
    }

    fn enter(&mut self, token: &Token<'a>) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::recursion_limit(MAX_DEPTH, token.line, token.column));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<JotValue> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(&token),
            TokenKind::LeftBracket => self.parse_array(&token),
            TokenKind::String => Ok(JotValue::String(string_content(&token))),
            TokenKind::Number => Ok(JotValue::Number(number_value(&token)?)),
            TokenKind::True => Ok(JotValue::Bool(true)),
            TokenKind::False => Ok(JotValue::Bool(false)),
            TokenKind::Null => Ok(JotValue::Null),
            TokenKind::Undefined => Ok(JotValue::Undefined),
            TokenKind::Infinity => {
                if token.text.starts_with('-') {
                    Ok(JotValue::Number(Number::Float(f64::NEG_INFINITY)))
                } else {
                    Ok(JotValue::Number(Number::Float(f64::INFINITY)))
                }
            }
            TokenKind::NaN => Ok(JotValue::Number(Number::Float(f64::NAN))),
            TokenKind::EndOfInput => {
                Err(Error::unexpected_eof("a value", token.line, token.column))
            }
            _ => Err(Error::unexpected_token(
                "a value",
                token.text,
                token.line,
                token.column,
            )),
        }
    }

    /// Parses the members of an object; the opening brace has already been
    /// consumed.
    ///
    /// Duplicate keys follow last-write-wins: the later value replaces the
    /// earlier one, at the position of the first insertion.
    fn parse_object(&mut self, open: &Token<'a>) -> Result<JotValue> {
        self.enter(open)?;
        let mut map = JotMap::new();

        loop {
            let token = self.advance()?;
            let key = match token.kind {
                TokenKind::RightBrace => break,
                TokenKind::Identifier => token.text.to_string(),
                TokenKind::String => string_content(&token),
                TokenKind::EndOfInput => {
                    return Err(Error::unexpected_eof(
                        "an object key or `}`",
                        token.line,
                        token.column,
                    ));
                }
                _ => {
                    return Err(Error::unexpected_token(
                        "an object key or `}`",
                        token.text,
                        token.line,
                        token.column,
                    ));
                }
            };

            let colon = self.advance()?;
            if colon.kind != TokenKind::Colon {
                return Err(match colon.kind {
                    TokenKind::EndOfInput => {
                        Error::unexpected_eof("`:`", colon.line, colon.column)
                    }
                    _ => Error::unexpected_token("`:`", colon.text, colon.line, colon.column),
                });
            }

            let value = self.parse_value()?;
            self.skip_type_hint()?;
            map.insert(key, value);

            let separator = self.advance()?;
            match separator.kind {
                TokenKind::Comma => {}
                TokenKind::RightBrace => break,
                TokenKind::EndOfInput => {
                    return Err(Error::unexpected_eof(
                        "`,` or `}`",
                        separator.line,
                        separator.column,
                    ));
                }
                _ => {
                    return Err(Error::unexpected_token(
                        "`,` or `}`",
                        separator.text,
                        separator.line,
                        separator.column,
                    ));
                }
            }
        }

        self.leave();
        Ok(JotValue::Object(map))
    }

    /// Parses the elements of an array; the opening bracket has already been
    /// consumed.
    fn parse_array(&mut self, open: &Token<'a>) -> Result<JotValue> {
        self.enter(open)?;
        let mut elements = Vec::new();

        loop {
            if self.peek()?.kind == TokenKind::RightBracket {
                self.advance()?;
                break;
            }

            let value = self.parse_value()?;
            self.skip_type_hint()?;
            elements.push(value);

            let separator = self.advance()?;
            match separator.kind {
                TokenKind::Comma => {}
                TokenKind::RightBracket => break,
                TokenKind::EndOfInput => {
                    return Err(Error::unexpected_eof(
                        "`,` or `]`",
                        separator.line,
                        separator.column,
                    ));
                }
                _ => {
                    return Err(Error::unexpected_token(
                        "`,` or `]`",
                        separator.text,
                        separator.line,
                        separator.column,
                    ));
                }
            }
        }

        self.leave();
        Ok(JotValue::Array(elements))
    }

    /// Consumes a type-hint token if one immediately follows a value.
    fn skip_type_hint(&mut self) -> Result<()> {
        if self.peek()?.kind == TokenKind::TypeHint {
            self.advance()?;
        }
        Ok(())
    }
}

/// Extracts the stored content of a string token.
///
/// Triple-quoted lexemes lose their 3+3 delimiters and keep the interior
/// verbatim, embedded newlines included. Single- and double-quoted lexemes
/// lose one delimiter on each side and have their escape sequences decoded;
/// an escape that means nothing is kept literally rather than rejected.
fn string_content(token: &Token<'_>) -> String {
    let text = token.text;
    if text.starts_with("\"\"\"") {
        return text[3..text.len() - 3].to_string();
    }

    let interior = &text[1..text.len() - 1];
    if !interior.contains('\\') {
        return interior.to_string();
    }

    let mut out = String::with_capacity(interior.len());
    let mut chars = interior.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('0') => out.push('\0'),
            Some('u') => {
                // \uXXXX; anything malformed stays literal
                let mut probe = chars.clone();
                let mut hex = String::new();
                for _ in 0..4 {
                    match probe.next() {
                        Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                        _ => {
                            hex.clear();
                            break;
                        }
                    }
                }
                let decoded = if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(c) => {
                        out.push(c);
                        chars = probe;
                    }
                    None => out.push_str("\\u"),
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            // The scanner never ends a string lexeme on a lone backslash
            None => out.push('\\'),
        }
    }
    out
}

/// Interprets a numeric lexeme according to its detected radix.
fn number_value(token: &Token<'_>) -> Result<Number> {
    let lexeme = token.text;

    if let Some(digits) = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X")) {
        return u64::from_str_radix(digits, 16)
            .map(Number::Hex)
            .map_err(|_| Error::invalid_number(lexeme, token.line, token.column));
    }

    if let Some(digits) = lexeme.strip_prefix("0b").or_else(|| lexeme.strip_prefix("0B")) {
        return u64::from_str_radix(digits, 2)
            .map(Number::Binary)
            .map_err(|_| Error::invalid_number(lexeme, token.line, token.column));
    }

    if lexeme.contains(|c| matches!(c, '.' | 'e' | 'E')) {
        return lexeme
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| Error::invalid_number(lexeme, token.line, token.column));
    }

    lexeme
        .parse::<i64>()
        .map(Number::Integer)
        .map_err(|_| Error::invalid_number(lexeme, token.line, token.column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_str;

    #[test]
    fn test_scalars() {
        assert_eq!(from_str("null").unwrap(), JotValue::Null);
        assert_eq!(from_str("undefined").unwrap(), JotValue::Undefined);
        assert_eq!(from_str("true").unwrap(), JotValue::Bool(true));
        assert_eq!(from_str("false").unwrap(), JotValue::Bool(false));
        assert_eq!(
            from_str("42").unwrap(),
            JotValue::Number(Number::Integer(42))
        );
        assert_eq!(
            from_str("-3.5").unwrap(),
            JotValue::Number(Number::Float(-3.5))
        );
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(
            from_str("0xFF").unwrap(),
            JotValue::Number(Number::Hex(255))
        );
        assert_eq!(
            from_str("0b1010").unwrap(),
            JotValue::Number(Number::Binary(10))
        );
    }

    #[test]
    fn test_special_floats() {
        let infinity = from_str("Infinity").unwrap();
        assert_eq!(infinity.as_f64(), Some(f64::INFINITY));

        let negative = from_str("-Infinity").unwrap();
        assert_eq!(negative.as_f64(), Some(f64::NEG_INFINITY));

        let nan = from_str("NaN").unwrap();
        assert!(nan.as_f64().unwrap().is_nan());
    }

    #[test]
    fn test_escape_decoding() {
        let value = from_str(r#""a\nb\tc\\d\"e""#).unwrap();
        assert_eq!(value.as_str(), Some("a\nb\tc\\d\"e"));

        let value = from_str(r#""snow: ☃""#).unwrap();
        assert_eq!(value.as_str(), Some("snow: \u{2603}"));

        // Unknown escapes stay literal
        let value = from_str(r#""\q""#).unwrap();
        assert_eq!(value.as_str(), Some("\\q"));
    }

    #[test]
    fn test_triple_quoted_verbatim() {
        let value = from_str("\"\"\"one\ntwo \\n not an escape\"\"\"").unwrap();
        assert_eq!(value.as_str(), Some("one\ntwo \\n not an escape"));
    }

    #[test]
    fn test_nested_structure() {
        let doc = from_str("{servers: [{host: 'a', port: 1}, {host: 'b', port: 2}]}").unwrap();
        let servers = doc.get("servers").and_then(|v| v.as_array()).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[1].get("host").and_then(|v| v.as_str()), Some("b"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let doc = from_str("{a: 1, a: 2}").unwrap();
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let doc = from_str("{a: 1, b: 2, a: 3}").unwrap();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_type_hints_are_erased() {
        let plain = from_str("{id: 42}").unwrap();
        let hinted = from_str("{id: 42 @i32}").unwrap();
        assert_eq!(plain, hinted);

        let plain = from_str("[1, 2]").unwrap();
        let hinted = from_str("[1 @u8, 2 @u8]").unwrap();
        assert_eq!(plain, hinted);
    }

    #[test]
    fn test_trailing_commas() {
        assert_eq!(from_str("{a: 1,}").unwrap(), from_str("{a: 1}").unwrap());
        assert_eq!(from_str("[1, 2,]").unwrap(), from_str("[1, 2]").unwrap());
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(from_str("{}").unwrap(), JotValue::Object(JotMap::new()));
        assert_eq!(from_str("[]").unwrap(), JotValue::Array(vec![]));
    }

    #[test]
    fn test_missing_close_brace() {
        assert!(matches!(
            from_str("{a: 1"),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_bare_numeral_key_rejected() {
        assert!(matches!(
            from_str("{1: 2}"),
            Err(Error::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(matches!(
            from_str("{a: 1} {b: 2}"),
            Err(Error::UnexpectedToken { .. })
        ));
        assert!(matches!(from_str("1 2"), Err(Error::UnexpectedToken { .. })));
    }

    #[test]
    fn test_integer_overflow() {
        assert!(matches!(
            from_str("99999999999999999999"),
            Err(Error::InvalidNumber { .. })
        ));
        assert!(matches!(
            from_str("0xFFFFFFFFFFFFFFFFF"),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut nested = String::new();
        for _ in 0..(MAX_DEPTH + 1) {
            nested.push('[');
        }
        for _ in 0..(MAX_DEPTH + 1) {
            nested.push(']');
        }
        assert!(matches!(
            from_str(&nested),
            Err(Error::RecursionLimit { .. })
        ));

        // One level under the limit is fine
        let mut shallow = String::new();
        for _ in 0..MAX_DEPTH {
            shallow.push('[');
        }
        for _ in 0..MAX_DEPTH {
            shallow.push(']');
        }
        assert!(from_str(&shallow).is_ok());
    }

    #[test]
    fn test_comma_required_between_members() {
        assert!(matches!(
            from_str("{a: 1 b: 2}"),
            Err(Error::UnexpectedToken { .. })
        ));
        assert!(matches!(
            from_str("[1 2]"),
            Err(Error::UnexpectedToken { .. })
        ));
    }
}
