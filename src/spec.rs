//! Jot Format Specification
//!
//! This module documents the Jot format as implemented by this library.
//!
//! # Overview
//!
//! Jot is a textual data-interchange format that is a strict superset of
//! JSON: every syntactically valid JSON document is a valid Jot document and
//! parses to the same structure. On top of JSON, Jot adds the conveniences
//! people keep reaching for in hand-written configuration:
//!
//! - line comments (`// ...`) and block comments (`/* ... */`)
//! - trailing commas in objects and arrays
//! - unquoted identifier keys
//! - single-quoted and triple-quoted (multiline) strings
//! - hexadecimal (`0xFF`) and binary (`0b1010`) integer literals
//! - the special numeric tokens `Infinity`, `-Infinity`, and `NaN`
//! - a JavaScript-style `undefined` literal, distinct from `null`
//! - optional post-value type annotations (`@i32`, `@[string]`) that are
//!   checked for shape and then discarded
//!
//! # Objects
//!
//! ```text
//! {
//!   // an identifier key needs no quotes
//!   name: "deep-thought",
//!   "quoted keys": 'work too',
//!   answer: 42 @i32,   // annotation, ignored
//! }
//! ```
//!
//! **Rules**:
//! - Keys are identifiers (`[A-Za-z_][A-Za-z0-9_]*`) or strings. The
//!   keyword lexemes (`true`, `false`, `null`, `undefined`, `Infinity`,
//!   `NaN`) must be quoted to be used as keys.
//! - A single trailing comma is permitted before the closing `}`.
//! - Duplicate keys are legal; the last occurrence wins, and the key keeps
//!   the position of its first appearance.
//!
//! # Arrays
//!
//! ```text
//! [1, 2, 3,]          // trailing comma allowed
//! [1 @u8, 2 @u8]      // per-element annotations allowed
//! ```
//!
//! # Strings
//!
//! Three delimiters:
//!
//! | Form | Example | Escapes |
//! |------|---------|---------|
//! | Double-quoted | `"a\nb"` | decoded |
//! | Single-quoted | `'a\nb'` | decoded |
//! | Triple-quoted | `"""raw\ntext"""` | none, interior is verbatim |
//!
//! Recognized escapes in quoted strings: `\\`, `\n`, `\r`, `\t`, `\"`,
//! `\'`, `\0`, and `\uXXXX`. An unrecognized escape is kept literally. A
//! literal newline inside a single- or double-quoted string is an error;
//! triple-quoted strings may span lines.
//!
//! # Numbers
//!
//! | Form | Example | Storage |
//! |------|---------|---------|
//! | Integer | `42`, `-17` | signed 64-bit |
//! | Float | `3.5`, `1e10`, `2.5e-3` | IEEE-754 64-bit |
//! | Hexadecimal | `0xFF`, `0X2a` | unsigned 64-bit, radix kept |
//! | Binary | `0b1010` | unsigned 64-bit, radix kept |
//! | Special | `Infinity`, `-Infinity`, `NaN` | IEEE-754 payloads |
//!
//! A decimal point is only part of a number when a digit follows it, so
//! `1.` is the integer `1` followed by a stray `.`. Hex and binary literals
//! are numerically equal to their decimal value but re-serialize in their
//! original radix.
//!
//! # Type annotations
//!
//! A value inside an object member or array element may be followed by a
//! hint of the form `@` plus alphanumerics, underscores, and square
//! brackets. Hints carry no semantics in this implementation: they are
//! validated for lexical shape, consumed, and discarded. `{id: 42 @i32}`
//! and `{id: 42}` produce indistinguishable trees.
//!
//! # Rendering
//!
//! The extended renderer emits objects block-style (one member per line)
//! and arrays on a single line unless an immediate element is itself an
//! object or array. Defaults: 2-space indent, bare identifier keys,
//! trailing commas, double-quoted strings. See [`crate::JotOptions`].
//!
//! The strict-JSON renderer emits literal JSON grammar. Values JSON cannot
//! spell are converted: `undefined`, `NaN`, and `±Infinity` become `null`;
//! hex and binary numbers are printed in decimal.
//!
//! # Limits
//!
//! Nesting is bounded at [`crate::parser::MAX_DEPTH`] levels; deeper input
//! is rejected with a resource error rather than risking the call stack.
//! Input after the top-level value (other than trivia) is rejected.
