//! Configuration options for extended-syntax rendering.
//!
//! [`JotOptions`] controls how the renderer formats a value tree in Jot's
//! native syntax. Strict-JSON output takes no options: it is a fixed
//! configuration that additionally converts the non-JSON values.
//!
//! ## Examples
//!
//! ```rust
//! use jot_format::{jot, to_string_with_options, JotOptions};
//!
//! let value = jot!({ "name": "Alice", "age": 30 });
//!
//! // Quoted keys and 4-space indentation
//! let options = JotOptions::new()
//!     .with_unquoted_keys(false)
//!     .with_indent(4);
//! let text = to_string_with_options(&value, options);
//! assert!(text.contains("\"name\""));
//! ```

/// Configuration options for rendering a value tree in extended syntax.
///
/// # Examples
///
/// ```rust
/// use jot_format::JotOptions;
///
/// // Defaults: 2-space indent, bare identifier keys, trailing commas,
/// // double-quoted strings
/// let options = JotOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(options.unquoted_keys);
/// assert!(options.trailing_commas);
/// assert!(!options.single_quotes);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct JotOptions {
    /// Spaces per nesting level in multi-line structures.
    pub indent: usize,
    /// Emit object keys bare when they match the identifier grammar.
    pub unquoted_keys: bool,
    /// Emit a trailing comma after the last member of non-empty containers.
    pub trailing_commas: bool,
    /// Delimit strings with `'` instead of `"`.
    pub single_quotes: bool,
}

impl Default for JotOptions {
    fn default() -> Self {
        JotOptions {
            indent: 2,
            unquoted_keys: true,
            trailing_commas: true,
            single_quotes: false,
        }
    }
}

impl JotOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::JotOptions;
    ///
    /// let options = JotOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether identifier-shaped keys are emitted without quotes.
    #[must_use]
    pub fn with_unquoted_keys(mut self, unquoted_keys: bool) -> Self {
        self.unquoted_keys = unquoted_keys;
        self
    }

    /// Sets whether non-empty containers end with a trailing comma.
    #[must_use]
    pub fn with_trailing_commas(mut self, trailing_commas: bool) -> Self {
        self.trailing_commas = trailing_commas;
        self
    }

    /// Sets whether strings are delimited with single quotes.
    ///
    /// The selected delimiter is always escaped inside string content; the
    /// non-selected quote character is emitted raw.
    #[must_use]
    pub fn with_single_quotes(mut self, single_quotes: bool) -> Self {
        self.single_quotes = single_quotes;
        self
    }
}
