//! Basic treefile parsing, querying, and write-back.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use treefile::{from_str, to_string};

const CONFIG: &str = "\
# application settings
name = Alice
tags = red, \"a,b\", blue

window
{
\twidth = 800
\theight = 600
}
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut root = from_str(CONFIG)?;

    // Query by dotted path
    println!("name   = {}", root.get_property("name").value(0));
    println!("tags   = {}", root.get_property("tags").full_value());
    println!("width  = {}", root.get_property("window.width").get_int(0)?);
    println!("height = {}", root.get_property("window.height").get_int(0)?);

    // Mutate and render back; comments and ordering survive
    root.get_property("window.width").set_int(0, 1024);
    root.get_property("window.fullscreen").set_bool(0, true);

    println!("\nWritten back:\n{}", to_string(&root));

    Ok(())
}
