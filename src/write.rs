//! Rendering a [`Node`] tree back to treefile text.
//!
//! ## Overview
//!
//! The writer is a recursive depth-first walk over the ordered children of
//! each node:
//!
//! - **Leaves** render as `name = value, value, ...` on one line, each value
//!   wrapped in quotes when it contains the separator, with no trailing
//!   separator
//! - **Branches** render as a blank line, the name, an opening brace, the
//!   indented children, a closing brace, and another blank line
//! - **Comments** render as their original line verbatim, with no `=` and
//!   no values
//!
//! Output is built in memory and handed to the caller (or written to a file
//! through the crate-root helpers). Rendering itself cannot fail; only the
//! file I/O around it can.
//!
//! ## Usage
//!
//! ```rust
//! use treefile::{tree, to_string};
//!
//! let root = tree! { "name" => "Alice", "tags" => ["red", "a,b"] };
//! assert_eq!(to_string(&root), "name = Alice\ntags = red, \"a,b\"\n");
//! ```

use std::fmt;

use crate::node::Node;
use crate::options::Options;

/// Renders `node`'s children as treefile text with default options
/// (comma separator, one-tab indent).
#[must_use]
pub fn to_string(node: &Node) -> String {
    to_string_with_options(node, &Options::default())
}

/// Renders `node`'s children as treefile text with custom options.
///
/// # Examples
///
/// ```rust
/// use treefile::{tree, to_string_with_options, Options};
///
/// let root = tree! { "pair" => ["x", "y"] };
/// let options = Options::new().with_separator(';');
/// assert_eq!(to_string_with_options(&root, &options), "pair = x; y\n");
/// ```
#[must_use]
pub fn to_string_with_options(node: &Node, options: &Options) -> String {
    let mut out = String::new();
    write_node(&mut out, node, options, 0);
    out
}

fn push_indent(out: &mut String, options: &Options, depth: usize) {
    for _ in 0..depth {
        out.push_str(&options.indent);
    }
}

fn write_node(out: &mut String, node: &Node, options: &Options, depth: usize) {
    for (name, child) in node.children() {
        if child.is_leaf() {
            push_indent(out, options, depth);
            out.push_str(name);
            if !child.is_comment() {
                out.push_str(" = ");
            }
            let count = child.value_count();
            for (i, value) in child.values().enumerate() {
                if value.contains(options.separator) {
                    out.push('"');
                    out.push_str(value);
                    out.push('"');
                } else {
                    out.push_str(value);
                }
                if i + 1 < count {
                    out.push(options.separator);
                    out.push(' ');
                }
            }
            out.push('\n');
        } else {
            // A branch's own values are never written.
            out.push('\n');
            push_indent(out, options, depth);
            out.push_str(name);
            out.push('\n');
            push_indent(out, options, depth);
            out.push_str("{\n");
            write_node(out, child, options, depth + 1);
            push_indent(out, options, depth);
            out.push_str("}\n\n");
        }
    }
}

/// Displays the node as a treefile document rendered with default options.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}
