//! # treefile
//!
//! A hierarchical, human-editable property tree format with order-preserving
//! parse and write-back.
//!
//! ## What is a treefile?
//!
//! A treefile stores named properties (optionally multi-valued, optionally
//! nested into named groups) as plain text a person can edit by hand:
//!
//! ```text
//! name = Alice
//! tags = red, "a,b", blue
//!
//! sub
//! {
//!     x = 1
//! }
//! ```
//!
//! Parsing reconstructs an in-memory [`Node`] tree; writing renders the
//! (possibly mutated) tree back to the same shape of text, preserving child
//! order and `#` comment lines.
//!
//! ## Key Features
//!
//! - **Order-Preserving**: children keep literal file order; name lookup
//!   never reorders them
//! - **Comment Fidelity**: `#` lines round-trip verbatim at their original
//!   position
//! - **Dotted Paths**: `root.get_property("server.listen.port")` navigates
//!   (and creates) nested properties
//! - **Typed Access**: best-effort `i64` / `f64` / `bool` parsing on read,
//!   with explicit errors instead of silent coercion
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! treefile = "0.1"
//! ```
//!
//! ### Parsing and querying
//!
//! ```rust
//! use treefile::from_str;
//!
//! let source = "name = Alice\ntags = red, \"a,b\", blue\nsub\n{\n\tx = 1\n}\n";
//! let mut root = from_str(source).unwrap();
//!
//! assert_eq!(root.get_property("name").value(0), "Alice");
//! assert_eq!(root.get_property("tags").value_count(), 3);
//! assert_eq!(root.get_property("tags").value(1), "a,b");
//! assert_eq!(root.get_property("sub.x").get_int(0).unwrap(), 1);
//! ```
//!
//! ### Building and writing
//!
//! ```rust
//! use treefile::{tree, to_string};
//!
//! let mut root = tree! {
//!     "name" => "Alice",
//!     "window" => {
//!         "width" => 800,
//!         "height" => 600
//!     }
//! };
//! root.get_property("window.title").set_value(0, "demo");
//!
//! let text = to_string(&root);
//! assert!(text.contains("width = 800"));
//! ```
//!
//! ### Existence checks vs. navigation
//!
//! [`Node::get_property`] creates every missing segment as a side effect
//! (auto-vivification). Use [`Node::has_property`] first when you only want
//! to ask:
//!
//! ```rust
//! use treefile::Node;
//!
//! let mut root = Node::new();
//! assert!(!root.has_property("a.b"));   // creates nothing
//! root.get_property("a.b");             // creates a, then b
//! assert!(root.has_property("a.b"));
//! ```
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full grammar, quoting rules, and
//! round-trip guarantees.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused example programs:
//!
//! - **`simple.rs`** - parse, query, mutate, write back
//! - **`macro.rs`** - building trees with the tree! macro
//! - **`custom_options.rs`** - customizing separator and indentation
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod format;
pub mod macros;
pub mod node;
pub mod options;
pub mod parse;
pub mod path;
pub mod write;

pub use error::{Error, Result};
pub use node::Node;
pub use options::Options;
pub use parse::Parser;
pub use write::{to_string, to_string_with_options};

use std::fs;
use std::io;
use std::path::Path;

/// Parses treefile text into a root [`Node`] with default options.
///
/// # Examples
///
/// ```rust
/// use treefile::from_str;
///
/// let mut root = from_str("greeting = hello").unwrap();
/// assert_eq!(root.get_property("greeting").value(0), "hello");
/// ```
///
/// # Errors
///
/// Returns an error if the input closes a group that was never opened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Node> {
    from_str_with_options(s, &Options::default())
}

/// Parses treefile text with a custom separator.
///
/// # Examples
///
/// ```rust
/// use treefile::{from_str_with_options, Options};
///
/// let options = Options::new().with_separator(';');
/// let mut root = from_str_with_options("tags = a; b", &options).unwrap();
/// assert_eq!(root.get_property("tags").value_count(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the input closes a group that was never opened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &Options) -> Result<Node> {
    Parser::new(options).parse(s)
}

/// Parses treefile text from an I/O stream with default options.
///
/// The whole stream is read into memory first; there is no incremental
/// parsing.
///
/// # Errors
///
/// Returns an error if reading fails or the input is structurally invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Node> {
    from_reader_with_options(reader, &Options::default())
}

/// Parses treefile text from an I/O stream with a custom separator.
///
/// # Errors
///
/// Returns an error if reading fails or the input is structurally invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(mut reader: R, options: &Options) -> Result<Node> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str_with_options(&input, options)
}

/// Reads and parses the treefile at `path` with default options.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, or a parse
/// error if its content is structurally invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read(path: impl AsRef<Path>) -> Result<Node> {
    read_with_options(path, &Options::default())
}

/// Reads and parses the treefile at `path` with a custom separator.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, or a parse
/// error if its content is structurally invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_with_options(path: impl AsRef<Path>, options: &Options) -> Result<Node> {
    let input = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
    from_str_with_options(&input, options)
}

/// Renders `node` to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use treefile::{to_writer, tree};
///
/// let root = tree! { "name" => "Alice" };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &root).unwrap();
/// assert_eq!(buffer, b"name = Alice\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, node: &Node) -> Result<()> {
    to_writer_with_options(writer, node, &Options::default())
}

/// Renders `node` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    node: &Node,
    options: &Options,
) -> Result<()> {
    writer
        .write_all(to_string_with_options(node, options).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Renders `node` to the file at `path` with default options, creating or
/// truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written. A write
/// that fails partway may leave a truncated file behind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write(node: &Node, path: impl AsRef<Path>) -> Result<()> {
    write_with_options(node, path, &Options::default())
}

/// Renders `node` to the file at `path` with custom options, creating or
/// truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_with_options(node: &Node, path: impl AsRef<Path>, options: &Options) -> Result<()> {
    // The handle is released when `file` drops, on success and error alike.
    let file = fs::File::create(path).map_err(|e| Error::io(&e.to_string()))?;
    to_writer_with_options(file, node, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "name = Alice\ntags = red, \"a,b\", blue\nsub\n{\n\tx = 1\n}\n";

    #[test]
    fn test_parse_query_sample() {
        let mut root = from_str(SAMPLE).unwrap();
        assert_eq!(root.get_property("name").value(0), "Alice");

        let tags = root.get_property("tags");
        assert_eq!(tags.value_count(), 3);
        let values: Vec<_> = tags.values().collect();
        assert_eq!(values, vec!["red", "a,b", "blue"]);

        assert_eq!(root.get_property("sub.x").get_int(0).unwrap(), 1);
    }

    #[test]
    fn test_write_then_reparse_sample() {
        let root = from_str(SAMPLE).unwrap();
        let rendered = to_string(&root);
        let reparsed = from_str(&rendered).unwrap();
        assert_eq!(root, reparsed);
    }

    #[test]
    fn test_custom_options_roundtrip() {
        let options = Options::new().with_separator('|').with_indent("  ");
        let root = from_str_with_options("pair = a | b", &options).unwrap();
        let rendered = to_string_with_options(&root, &options);
        assert_eq!(rendered, "pair = a| b\n");
        let reparsed = from_str_with_options(&rendered, &options).unwrap();
        assert_eq!(root, reparsed);
    }

    #[test]
    fn test_from_reader() {
        let cursor = std::io::Cursor::new(SAMPLE.as_bytes());
        let root = from_reader(cursor).unwrap();
        assert!(root.has_property("sub.x"));
    }

    #[test]
    fn test_to_writer() {
        let root = from_str("a = 1").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &root).unwrap();
        assert_eq!(buffer, b"a = 1\n");
    }
}
