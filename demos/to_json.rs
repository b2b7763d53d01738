//! Converting Jot documents to strict JSON.
//!
//! Values JSON cannot spell are converted: undefined, NaN, and ±Infinity
//! become null, and radix literals print in decimal.
//!
//! Run with: cargo run --example to_json

use jot_format::{from_str, to_json_string};

fn main() {
    let source = r#"
        {
            mask: 0xFF,        // becomes 255
            bits: 0b101,       // becomes 5
            limit: Infinity,   // becomes null
            score: NaN,        // becomes null
            legacy: undefined, // becomes null
        }
    "#;

    let doc = from_str(source).unwrap();
    println!("{}", to_json_string(&doc));
}
