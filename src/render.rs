//! Rendering a value tree back to text.
//!
//! The renderer walks a [`JotValue`] tree and emits text in one of two modes:
//!
//! - **extended** — Jot's native syntax, shaped by [`JotOptions`] (unquoted
//!   keys, trailing commas, quote choice, indent width);
//! - **strict JSON** — a fixed configuration (quoted keys, no trailing
//!   commas, double quotes) that additionally converts the non-JSON values:
//!   `undefined`, `NaN`, and `±Infinity` all become `null`.
//!
//! Both modes share the same layout algorithm: an object always renders
//! block-style, one member per line; an array renders on a single line when
//! none of its immediate elements is an object or array, and block-style
//! otherwise. Rendering never fails and never mutates the tree.
//!
//! ## Examples
//!
//! ```rust
//! use jot_format::{from_str, to_string, to_json_string};
//!
//! let doc = from_str("{retries: 0x3, delay: Infinity}").unwrap();
//!
//! assert_eq!(to_string(&doc), "{\n  retries: 0x3,\n  delay: Infinity,\n}");
//! assert_eq!(to_json_string(&doc), "{\n  \"retries\": 3,\n  \"delay\": null\n}");
//! ```

use crate::{JotOptions, JotValue, Number};

/// Renders a value tree in extended syntax with default options.
#[must_use]
pub fn to_string(value: &JotValue) -> String {
    to_string_with_options(value, JotOptions::default())
}

/// Renders a value tree in extended syntax with the given options.
#[must_use]
pub fn to_string_with_options(value: &JotValue, options: JotOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.render(value);
    renderer.into_inner()
}

/// Renders a value tree as strict JSON.
///
/// `undefined`, `NaN`, and `±Infinity` have no JSON spelling and render as
/// `null`; hexadecimal and binary numbers lose their radix and render in
/// decimal. The conversion is lossy but total.
#[must_use]
pub fn to_json_string(value: &JotValue) -> String {
    let mut renderer = Renderer::strict_json();
    renderer.render(value);
    renderer.into_inner()
}

/// The tree walker behind [`to_string`] and [`to_json_string`].
///
/// Holds the output buffer and the current indent level; one renderer
/// instance produces one document.
pub struct Renderer {
    output: String,
    options: JotOptions,
    strict_json: bool,
    indent_level: usize,
}

impl Renderer {
    pub fn new(options: JotOptions) -> Self {
        Renderer {
            output: String::with_capacity(256),
            options,
            strict_json: false,
            indent_level: 0,
        }
    }

    /// Creates a renderer locked to the strict-JSON configuration.
    #[must_use]
    pub fn strict_json() -> Self {
        Renderer {
            output: String::with_capacity(256),
            options: JotOptions {
                indent: 2,
                unquoted_keys: false,
                trailing_commas: false,
                single_quotes: false,
            },
            strict_json: true,
            indent_level: 0,
        }
    }

    pub fn render(&mut self, value: &JotValue) {
        self.write_value(value);
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        for _ in 0..(self.indent_level * self.options.indent) {
            self.output.push(' ');
        }
    }

    fn write_value(&mut self, value: &JotValue) {
        match value {
            JotValue::Null => self.output.push_str("null"),
            JotValue::Undefined => {
                if self.strict_json {
                    self.output.push_str("null");
                } else {
                    self.output.push_str("undefined");
                }
            }
            JotValue::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            JotValue::Number(n) => self.write_number(n),
            JotValue::String(s) => self.write_string(s),
            JotValue::Array(elements) => self.write_array(elements),
            JotValue::Object(map) => self.write_object(map),
        }
    }

    fn write_number(&mut self, number: &Number) {
        if self.strict_json {
            match number {
                Number::Float(x) if x.is_nan() || x.is_infinite() => {
                    self.output.push_str("null");
                }
                Number::Hex(u) | Number::Binary(u) => {
                    self.output.push_str(&u.to_string());
                }
                other => self.output.push_str(&other.to_string()),
            }
        } else {
            self.output.push_str(&number.to_string());
        }
    }

    fn write_object(&mut self, map: &crate::JotMap) {
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }

        // Objects always render block-style
        self.output.push_str("{\n");
        self.indent_level += 1;
        let last = map.len() - 1;
        for (i, (key, value)) in map.iter().enumerate() {
            self.write_indent();
            self.write_key(key);
            self.output.push_str(": ");
            self.write_value(value);
            if i < last || (self.options.trailing_commas && !self.strict_json) {
                self.output.push(',');
            }
            self.output.push('\n');
        }
        self.indent_level -= 1;
        self.write_indent();
        self.output.push('}');
    }

    fn write_array(&mut self, elements: &[JotValue]) {
        if elements.is_empty() {
            self.output.push_str("[]");
            return;
        }

        let simple = elements
            .iter()
            .all(|v| !matches!(v, JotValue::Object(_) | JotValue::Array(_)));

        if simple {
            self.output.push('[');
            let last = elements.len() - 1;
            for (i, element) in elements.iter().enumerate() {
                self.write_value(element);
                if i < last {
                    self.output.push_str(", ");
                } else if self.options.trailing_commas && !self.strict_json {
                    self.output.push(',');
                }
            }
            self.output.push(']');
            return;
        }

        self.output.push_str("[\n");
        self.indent_level += 1;
        let last = elements.len() - 1;
        for (i, element) in elements.iter().enumerate() {
            self.write_indent();
            self.write_value(element);
            if i < last || (self.options.trailing_commas && !self.strict_json) {
                self.output.push(',');
            }
            self.output.push('\n');
        }
        self.indent_level -= 1;
        self.write_indent();
        self.output.push(']');
    }

    fn write_key(&mut self, key: &str) {
        if self.options.unquoted_keys && is_identifier(key) {
            self.output.push_str(key);
        } else {
            self.write_string(key);
        }
    }

    fn write_string(&mut self, s: &str) {
        let quote = if !self.strict_json && self.options.single_quotes {
            '\''
        } else {
            '"'
        };
        self.output.push(quote);
        for ch in s.chars() {
            if self.strict_json {
                match ch {
                    '"' => self.output.push_str("\\\""),
                    '\\' => self.output.push_str("\\\\"),
                    '\n' => self.output.push_str("\\n"),
                    '\r' => self.output.push_str("\\r"),
                    '\t' => self.output.push_str("\\t"),
                    '\u{0008}' => self.output.push_str("\\b"),
                    '\u{000C}' => self.output.push_str("\\f"),
                    c if (c as u32) < 0x20 => {
                        self.output.push_str(&format!("\\u{:04X}", c as u32));
                    }
                    c => self.output.push(c),
                }
            } else {
                match ch {
                    '\\' => self.output.push_str("\\\\"),
                    '\n' => self.output.push_str("\\n"),
                    '\r' => self.output.push_str("\\r"),
                    '\t' => self.output.push_str("\\t"),
                    // Only the selected delimiter is escaped; the other
                    // quote character passes through raw
                    c if c == quote => {
                        self.output.push('\\');
                        self.output.push(c);
                    }
                    c => self.output.push(c),
                }
            }
        }
        self.output.push(quote);
    }
}

/// Whether a key matches the identifier grammar and can be emitted bare.
///
/// Keyword lexemes are excluded even though they match the grammar: a bare
/// `true:` would scan as a keyword token and fail to reparse as a key.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    !matches!(
        s,
        "true" | "false" | "null" | "undefined" | "Infinity" | "NaN"
    )
}
