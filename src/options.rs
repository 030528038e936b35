//! Configuration options for reading and writing property trees.
//!
//! This module provides [`Options`], which controls the two configurable
//! aspects of the text format:
//!
//! - the **separator** character dividing multiple values in one assignment
//!   (default comma)
//! - the **indent** string emitted per nesting level on write (default one
//!   tab)
//!
//! The separator must match between a write and a subsequent read of the
//! same file or value boundaries will be misinterpreted. This is a caller
//! contract; the format itself carries no marker for it. Indentation is
//! purely cosmetic and ignored by the parser.
//!
//! ## Examples
//!
//! ```rust
//! use treefile::{tree, to_string_with_options, Options};
//!
//! let root = tree! { "tags" => ["a", "b"] };
//!
//! let options = Options::new().with_separator(';').with_indent("    ");
//! let text = to_string_with_options(&root, &options);
//! assert_eq!(text, "tags = a; b\n");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for parsing and rendering a property tree.
///
/// # Examples
///
/// ```rust
/// use treefile::Options;
///
/// // Defaults: comma separator, one-tab indent
/// let options = Options::new();
/// assert_eq!(options.separator, ',');
/// assert_eq!(options.indent, "\t");
///
/// // Custom configuration
/// let options = Options::new().with_separator('|').with_indent("  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Character that divides multiple values within one assignment.
    pub separator: char,
    /// String emitted once per nesting level when writing.
    pub indent: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            separator: ',',
            indent: "\t".to_string(),
        }
    }
}

impl Options {
    /// Creates default options (comma separator, one-tab indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value separator character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Options;
    ///
    /// let options = Options::new().with_separator(';');
    /// assert_eq!(options.separator, ';');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the per-level indentation string used when writing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Options;
    ///
    /// let options = Options::new().with_indent("  ");
    /// assert_eq!(options.indent, "  ");
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
