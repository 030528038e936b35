//! Parsing treefile text into a [`Node`] tree.
//!
//! ## Overview
//!
//! The parser is a single-pass, line-oriented state machine:
//!
//! - **Scope stack**: nesting is carried entirely by `{` / `}` lines driving
//!   an explicit stack of scopes; indentation is cosmetic and ignored
//! - **Lazy name disambiguation**: a line holding just a name is remembered
//!   and only becomes a group header if the *next* structural line is `{`
//! - **Quote toggling**: inside a value list, `"` toggles quote mode so the
//!   separator can appear within a value; quote characters themselves are
//!   consumed, and no escape sequence exists
//! - **Comment capture**: `#` lines are preserved verbatim as comment
//!   pseudo-properties at their original sibling position
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use treefile::from_str;
//!
//! let mut root = from_str("name = Alice\ntags = red, blue").unwrap();
//! assert_eq!(root.get_property("name").value(0), "Alice");
//! assert_eq!(root.get_property("tags").value_count(), 2);
//! ```

use crate::error::{Error, Result};
use crate::node::Node;
use crate::options::Options;

/// The treefile parser.
///
/// Holds the configured separator and turns input text into a [`Node`]
/// tree. Created via [`Parser::new`]; most callers go through
/// [`crate::from_str`] or [`crate::read`] instead.
pub struct Parser {
    separator: char,
}

/// Cross-line carried state. A name seen on one line (bare, or on the left
/// of an assignment) only gains structural meaning if the following line
/// opens a group.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Pending {
    Idle,
    Name(String),
}

impl Pending {
    fn remember(&mut self, name: &str) {
        *self = Pending::Name(name.to_string());
    }

    /// Name a `{` line opens. An idle state opens the empty name; the
    /// pending name survives the open, so repeated braces reopen the same
    /// child.
    fn group_name(&self) -> &str {
        match self {
            Pending::Idle => "",
            Pending::Name(name) => name,
        }
    }
}

impl Parser {
    /// Creates a parser using the separator from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Parser {
            separator: options.separator,
        }
    }

    /// Parses `input` into a fresh root node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedClose`] when a `}` appears with no open
    /// group to match it.
    pub fn parse(&self, input: &str) -> Result<Node> {
        let mut root = Node::new();
        // Scope stack: child positions from the root down to the current
        // scope. Empty stack means the root itself.
        let mut stack: Vec<usize> = Vec::new();
        let mut pending = Pending::Idle;

        for (number, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                cursor(&mut root, &stack).push_comment(line);
                continue;
            }

            // An assignment wins over any structural reading of the line.
            if let Some(at) = line.find('=') {
                let name = line[..at].trim();
                let value_text = line[at + 1..].trim();
                self.store_values(cursor(&mut root, &stack), name, value_text);
                pending.remember(name);
            } else if line.starts_with('{') {
                let scope = cursor(&mut root, &stack);
                let opened = scope.ensure_index(pending.group_name());
                stack.push(opened);
            } else if line.starts_with('}') {
                if stack.pop().is_none() {
                    return Err(Error::unbalanced_close(number + 1));
                }
            } else {
                pending.remember(line);
            }
        }

        Ok(root)
    }

    /// Splits `value_text` into tokens on the separator, honoring quote
    /// toggling, and stores each trimmed token at sequential indices under
    /// `name`. An empty `value_text` stores nothing and creates no child.
    fn store_values(&self, scope: &mut Node, name: &str, value_text: &str) {
        let mut in_quotes = false;
        let mut token = String::new();
        let mut item = 0;

        for ch in value_text.chars() {
            if ch == '"' {
                in_quotes = !in_quotes;
            } else if in_quotes || ch != self.separator {
                token.push(ch);
            } else {
                scope.ensure_child(name).set_value(item, token.trim());
                token.clear();
                item += 1;
            }
        }
        if !token.is_empty() {
            scope.ensure_child(name).set_value(item, token.trim());
        }
    }
}

fn cursor<'a>(root: &'a mut Node, stack: &[usize]) -> &'a mut Node {
    let mut node = root;
    for &i in stack {
        node = node.child_at_mut(i);
    }
    node
}
