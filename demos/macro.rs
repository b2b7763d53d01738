//! Building values with the jot! macro.
//!
//! Run with: cargo run --example macro

use jot_format::{jot, to_string};

fn main() {
    let value = jot!({
        "user": "alice",
        "roles": ["admin", "ops"],
        "quota": 2.5,
        "suspended_until": null,
        "nickname": undefined,
    });

    println!("{}", to_string(&value));
}
