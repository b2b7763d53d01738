//! Controlling the extended output style with JotOptions.
//!
//! Run with: cargo run --example custom_options

use jot_format::{from_str, to_string_with_options, JotOptions};

fn main() {
    let doc = from_str("{name: 'box', size: [4, 4, 4], lid: {hinged: true}}").unwrap();

    println!("defaults:\n{}\n", to_string_with_options(&doc, JotOptions::new()));

    let quoted = JotOptions::new()
        .with_unquoted_keys(false)
        .with_trailing_commas(false);
    println!("quoted, no trailing commas:\n{}\n", to_string_with_options(&doc, quoted));

    let wide = JotOptions::new().with_indent(4).with_single_quotes(true);
    println!("4-space indent, single quotes:\n{}", to_string_with_options(&doc, wide));
}
