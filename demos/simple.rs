//! Your first Jot experience: parse a config document and read values out.
//!
//! Run with: cargo run --example simple

use jot_format::from_str;

fn main() {
    let source = r#"
        // application config
        {
            name: 'demo-app',
            port: 8080,
            debug: true,
            flags: 0b1011,          // feature bits keep their radix
            max_upload: 0x4000000,  // 64 MiB
            motd: """
Welcome!
Be nice.
""",
        }
    "#;

    let doc = from_str(source).expect("valid Jot");

    println!("name:  {:?}", doc.get("name").and_then(|v| v.as_str()));
    println!("port:  {:?}", doc.get("port").and_then(|v| v.as_i64()));
    println!("debug: {:?}", doc.get("debug").and_then(|v| v.as_bool()));
    println!("flags: {:?}", doc.get("flags").and_then(|v| v.as_i64()));
    println!("motd:\n{}", doc.get("motd").and_then(|v| v.as_str()).unwrap_or(""));
}
