//! Error types for treefile parsing, writing, and tree access.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the source file cannot be opened, or the destination
//!   cannot be created/written
//! - **Format Errors**: a typed accessor ([`Node::get_int`] and friends) was
//!   invoked on text that does not parse as that type
//! - **Index Errors**: a typed accessor addressed a value slot past the end
//!   of the property's value list
//! - **Structural Errors**: the input closes a group that was never opened
//!
//! All failures are surfaced synchronously to the caller of the operation
//! that triggered them; there is no internal recovery or retry. A write that
//! fails partway through may leave a truncated file on disk.
//!
//! ## Examples
//!
//! ```rust
//! use treefile::{from_str, Error};
//!
//! let result = from_str("}");
//! assert!(matches!(result, Err(Error::UnbalancedClose { line: 1 })));
//! ```
//!
//! [`Node::get_int`]: crate::Node::get_int

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading, writing, or
/// querying a property tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A stored value does not parse as the requested type
    #[error("cannot parse value {value:?} as {expected}")]
    Format {
        expected: &'static str,
        value: String,
    },

    /// A typed accessor addressed a value index past the end of the list
    #[error("value index {index} out of range (property holds {len} values)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A replace was attempted under a name with no existing child
    #[error("no child property named {0:?}")]
    UnknownChild(String),

    /// A closing brace appeared with no open group to match it
    #[error("unbalanced '}}' at line {line}: no open group to close")]
    UnbalancedClose { line: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a format error for text that does not parse as `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Error;
    ///
    /// let err = Error::format("integer", "12.5");
    /// assert!(err.to_string().contains("integer"));
    /// ```
    pub fn format(expected: &'static str, value: &str) -> Self {
        Error::Format {
            expected,
            value: value.to_string(),
        }
    }

    /// Creates an out-of-range error for a value index read past the end.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates an unbalanced-close error for an excess `}` at `line`
    /// (1-based).
    pub fn unbalanced_close(line: usize) -> Self {
        Error::UnbalancedClose { line }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
