//! Building trees with the tree! macro.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use treefile::{to_string, tree};

fn main() -> Result<(), Box<dyn Error>> {
    let root = tree! {
        "name" => "demo",
        "version" => 3,
        "tags" => ["cli", "config"],
        "server" => {
            "host" => "127.0.0.1",
            "port" => 8080,
            "tls" => {
                "enabled" => false
            }
        }
    };

    println!("{}", to_string(&root));

    // The macro and the parser agree on the result
    let reparsed = treefile::from_str(&to_string(&root))?;
    assert_eq!(root, reparsed);
    println!("round-trip ok");

    Ok(())
}
