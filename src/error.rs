//! Error types for Jot parsing and rendering.
//!
//! Every parse failure is terminal for the current call: there is no error
//! recovery or partial-tree return, and a failing parse yields no usable
//! value. Errors carry the 1-based line and column at which the offending
//! input was found.
//!
//! ## Error Categories
//!
//! - **Lexical**: unterminated string, unexpected character
//! - **Syntactic**: unexpected token, unexpected end of input
//! - **Numeric**: overflow or malformed digits for the detected radix
//! - **Resource**: nesting deeper than the parser's depth limit
//!
//! ## Examples
//!
//! ```rust
//! use jot_format::{from_str, Error, JotValue};
//!
//! let result: Result<JotValue, Error> = from_str("{name: ");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or rendering Jot.
///
/// Scanner errors pass through the parser without translation, so the variant
/// always names the component that first detected the problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A byte the scanner has no rule for
    #[error("unexpected character `{ch}` at line {line}, column {column}")]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        column: usize,
    },

    /// A single-line string ran into a newline or end of input before its
    /// closing quote
    #[error("unterminated string starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    /// The parser needed one kind of token and saw another
    #[error("unexpected token `{found}` at line {line}, column {column}: expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },

    /// The token stream ended in the middle of a construct
    #[error("unexpected end of input at line {line}, column {column}: expected {expected}")]
    UnexpectedEof {
        expected: String,
        line: usize,
        column: usize,
    },

    /// A numeric literal overflowed its target width or contained digits
    /// illegal for its radix
    #[error("invalid number `{literal}` at line {line}, column {column}")]
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
    },

    /// Nesting exceeded the parser's depth limit
    #[error("nesting depth limit of {limit} exceeded at line {line}, column {column}")]
    RecursionLimit {
        limit: usize,
        line: usize,
        column: usize,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through the serde integration
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected-character error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Error;
    ///
    /// let err = Error::unexpected_character('$', 3, 7);
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn unexpected_character(ch: char, line: usize, column: usize) -> Self {
        Error::UnexpectedCharacter { ch, line, column }
    }

    /// Creates an unterminated-string error at the position of the opening quote.
    pub fn unterminated_string(line: usize, column: usize) -> Self {
        Error::UnterminatedString { line, column }
    }

    /// Creates an unexpected-token error.
    ///
    /// `expected` describes what the grammar required; `found` is the token
    /// the parser actually saw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Error;
    ///
    /// let err = Error::unexpected_token("`:`", "`,`", 1, 5);
    /// assert!(err.to_string().contains("expected `:`"));
    /// ```
    pub fn unexpected_token(expected: &str, found: &str, line: usize, column: usize) -> Self {
        Error::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            line,
            column,
        }
    }

    /// Creates an unexpected-end-of-input error.
    pub fn unexpected_eof(expected: &str, line: usize, column: usize) -> Self {
        Error::UnexpectedEof {
            expected: expected.to_string(),
            line,
            column,
        }
    }

    /// Creates an invalid-number error for the given raw literal.
    pub fn invalid_number(literal: &str, line: usize, column: usize) -> Self {
        Error::InvalidNumber {
            literal: literal.to_string(),
            line,
            column,
        }
    }

    /// Creates a depth-limit error.
    pub fn recursion_limit(limit: usize, line: usize, column: usize) -> Self {
        Error::RecursionLimit {
            limit,
            line,
            column,
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the source position of this error, if it carries one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Error;
    ///
    /// let err = Error::unterminated_string(2, 9);
    /// assert_eq!(err.position(), Some((2, 9)));
    /// assert_eq!(Error::custom("no position").position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnexpectedCharacter { line, column, .. }
            | Error::UnterminatedString { line, column }
            | Error::UnexpectedToken { line, column, .. }
            | Error::UnexpectedEof { line, column, .. }
            | Error::InvalidNumber { line, column, .. }
            | Error::RecursionLimit { line, column, .. } => Some((*line, *column)),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
