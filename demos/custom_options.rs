//! Customizing separator and indentation with Options.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use treefile::{from_str_with_options, to_string_with_options, tree, Options};

fn main() -> Result<(), Box<dyn Error>> {
    let root = tree! {
        "cells" => ["left", "mid,dle", "right"],
        "grid" => {
            "rows" => 3,
            "cols" => 4
        }
    };

    // Default: comma separator, tab indent
    println!("Default (comma):");
    println!("{}", treefile::to_string(&root));

    // Pipe separator: the embedded comma no longer needs quoting
    println!("Pipe separator:");
    let pipe = Options::new().with_separator('|');
    let rendered = to_string_with_options(&root, &pipe);
    println!("{}", rendered);

    // The separator is a caller contract: re-read with the same options
    let back = from_str_with_options(&rendered, &pipe)?;
    assert_eq!(root, back);

    // Four-space indentation
    println!("Four-space indent:");
    let spaces = Options::new().with_indent("    ");
    println!("{}", to_string_with_options(&root, &spaces));

    Ok(())
}
