//! # jot-format
//!
//! A parser and serializer for **Jot**, a textual data-interchange format
//! that is a strict superset of JSON.
//!
//! ## What is Jot?
//!
//! Jot is JSON with the rough edges filed off for human-edited files:
//! comments, trailing commas, unquoted identifier keys, single- and
//! triple-quoted strings, hexadecimal and binary integer literals, the
//! special numeric tokens `Infinity`/`-Infinity`/`NaN`, a JavaScript-style
//! `undefined` literal, and inert `@type` annotations. Every valid JSON
//! document is a valid Jot document.
//!
//! ## Key Features
//!
//! - **Superset of JSON**: existing JSON parses unchanged, key order and all
//! - **Round-trip fidelity**: objects keep insertion order, hex and binary
//!   literals keep their radix, `undefined` stays distinct from `null`
//! - **Two output modes**: Jot's native extended syntax, or strict JSON with
//!   a documented lossy conversion for the values JSON cannot spell
//! - **Typed errors**: every failure carries the line and column it came from
//! - **Serde friendly**: [`JotValue`] implements `Serialize` and
//!   `Deserialize`, so trees move freely between serde formats
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jot-format = "0.1"
//! ```
//!
//! ### Parsing and rendering
//!
//! ```rust
//! use jot_format::{from_str, to_string, to_json_string};
//!
//! let doc = from_str(r#"
//!     {
//!         // comments are fine
//!         name: 'deep-thought',
//!         answer: 0x2A @u8,     // annotations are parsed and dropped
//!         timeout: Infinity,
//!     }
//! "#).unwrap();
//!
//! assert_eq!(doc.get("answer").and_then(|v| v.as_i64()), Some(42));
//!
//! // Native syntax keeps the radix
//! assert!(to_string(&doc).contains("0x2A"));
//!
//! // Strict JSON converts what JSON cannot spell
//! assert!(to_json_string(&doc).contains("\"timeout\": null"));
//! ```
//!
//! ### Building values with the jot! macro
//!
//! ```rust
//! use jot_format::{jot, JotValue};
//!
//! let data = jot!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "parsing"]
//! });
//!
//! if let JotValue::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: single pass, one token of lookahead, no backtracking
//! - **Rendering**: O(n) walk over the tree, pre-allocated output buffer
//! - **Memory**: the tree exclusively owns its contents; tokens borrow the
//!   source buffer and never outlive a parse call
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API for any input: pathological nesting is
//!   rejected with a typed error at [`parser::MAX_DEPTH`] levels
//! - Proper error propagation with `Result` types
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the full format description.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Parse a config file and read values out
//! - **`macro.rs`** - Building values with the jot! macro
//! - **`custom_options.rs`** - Controlling the extended output style
//! - **`to_json.rs`** - Converting Jot documents to strict JSON
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod spec;
pub mod value;

pub use error::{Error, Result};
pub use map::JotMap;
pub use options::JotOptions;
pub use render::{to_json_string, to_string, to_string_with_options, Renderer};
pub use value::{JotValue, Number};

use std::io;

/// Parses one Jot document from a string into a [`JotValue`] tree.
///
/// The entire input must be consumed: a complete value followed by anything
/// other than whitespace or comments is an error.
///
/// # Examples
///
/// ```rust
/// use jot_format::from_str;
///
/// let doc = from_str("{port: 8080, host: 'localhost'}").unwrap();
/// assert_eq!(doc.get("port").and_then(|v| v.as_i64()), Some(8080));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid Jot. Errors include line and
/// column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(source: &str) -> Result<JotValue> {
    parser::Parser::new(source).parse_document()
}

/// Parses one Jot document from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid Jot.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<JotValue> {
    let source = std::str::from_utf8(bytes).map_err(|e| Error::custom(e.to_string()))?;
    from_str(source)
}

/// Parses one Jot document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use jot_format::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(doc.as_array().map(|a| a.len()), Some(3));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid Jot.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<JotValue>
where
    R: io::Read,
{
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&source)
}

/// Renders a value tree in extended syntax to a writer.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &JotValue) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, JotOptions::default())
}

/// Renders a value tree in extended syntax to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, value: &JotValue, options: JotOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(value, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_round_trip() {
        let source = "{name: 'Alice', tags: ['admin', 'user'], active: true}";
        let doc = from_str(source).unwrap();
        let rendered = to_string(&doc);
        assert_eq!(from_str(&rendered).unwrap(), doc);
    }

    #[test]
    fn test_from_slice() {
        let doc = from_slice(b"{a: 1}").unwrap();
        assert_eq!(doc.get("a").and_then(|v| v.as_i64()), Some(1));

        assert!(from_slice(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn test_from_reader() {
        let doc = from_reader(std::io::Cursor::new(b"[true, false]")).unwrap();
        assert_eq!(doc.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str("[1, 2]").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, b"[1, 2,]");
    }

    #[test]
    fn test_display_uses_extended_syntax() {
        let doc = from_str("{n: 0xFF}").unwrap();
        assert_eq!(doc.to_string(), "{\n  n: 0xFF,\n}");
    }

    #[test]
    fn test_serde_interop() {
        let doc = from_str("{a: [1, 2.5], b: null}").unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"a":[1,2.5],"b":null}"#);

        let back: JotValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
