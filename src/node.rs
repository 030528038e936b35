//! The property tree entity.
//!
//! This module provides [`Node`], the single recursive type in the crate.
//! A node is either a **leaf** (no children, carrying an ordered list of
//! string values) or a **branch** (one or more named children; a branch's
//! own values are unused). Children are stored in insertion order and are
//! additionally indexed by name for O(1) lookup.
//!
//! ## Why a Vec plus an IndexMap?
//!
//! The ordered children live in a `Vec<(String, Node)>`; a side
//! [`IndexMap`] maps each *property* name to its position. Comment
//! pseudo-properties (preserved `#` lines) are appended to the sequence but
//! never registered in the index, because their synthetic names, the full
//! original line, may legitimately repeat. The index therefore holds every
//! real property name exactly once, and the sequence is the single source
//! of ordering. The format never deletes entries, so no removal or
//! compaction logic exists.
//!
//! ## Usage Patterns
//!
//! ### Building a tree by hand
//!
//! ```rust
//! use treefile::Node;
//!
//! let mut root = Node::new();
//! root.ensure_child("name").set_value(0, "Alice");
//! root.ensure_child("port").set_int(0, 8080);
//!
//! assert_eq!(root.child("name").map(|n| n.value(0)), Some("Alice"));
//! assert_eq!(root.child("port").and_then(|n| n.get_int(0).ok()), Some(8080));
//! ```
//!
//! ### Multi-valued properties
//!
//! ```rust
//! use treefile::Node;
//!
//! let mut root = Node::new();
//! let tags = root.ensure_child("tags");
//! tags.set_value(0, "red");
//! tags.set_value(1, "blue");
//!
//! assert_eq!(tags.value_count(), 2);
//! assert_eq!(tags.full_value(), "red, blue");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A node in a property tree: ordered named children plus a multi-valued
/// string payload.
///
/// Leaves carry values; branches carry children. Every node exclusively
/// owns its subtree: children are only ever appended or replaced, never
/// shared between parents.
///
/// # Examples
///
/// ```rust
/// use treefile::Node;
///
/// let mut root = Node::new();
/// root.ensure_child("greeting").set_value(0, "hello");
/// assert!(root.has_child("greeting"));
/// assert!(!root.has_child("farewell"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    values: Vec<String>,
    children: Vec<(String, Node)>,
    index: IndexMap<String, usize>,
    comment: bool,
}

impl Node {
    /// Creates an empty node with no values and no children.
    #[must_use]
    pub fn new() -> Self {
        Node::default()
    }

    fn new_comment() -> Self {
        Node {
            comment: true,
            ..Node::default()
        }
    }

    /// Stores `text` as the value at position `item`, growing the value
    /// list with empty strings as needed. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Node;
    ///
    /// let mut node = Node::new();
    /// node.set_value(2, "third");
    /// assert_eq!(node.value_count(), 3);
    /// assert_eq!(node.value(0), "");
    /// assert_eq!(node.value(2), "third");
    /// ```
    pub fn set_value(&mut self, item: usize, text: impl Into<String>) {
        while self.values.len() <= item {
            self.values.push(String::new());
        }
        self.values[item] = text.into();
    }

    /// Returns the value at position `item`, or `""` when out of range.
    /// Never fails.
    #[must_use]
    pub fn value(&self, item: usize) -> &str {
        self.values.get(item).map(String::as_str).unwrap_or("")
    }

    /// Returns all values joined with `", "`, regardless of the configured
    /// separator. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Node;
    ///
    /// let mut node = Node::new();
    /// node.set_value(0, "a");
    /// node.set_value(1, "b");
    /// assert_eq!(node.full_value(), "a, b");
    /// ```
    #[must_use]
    pub fn full_value(&self) -> String {
        self.values.join(", ")
    }

    /// Returns the number of values stored on this node.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the values in index order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    fn value_at(&self, item: usize) -> Result<&str> {
        self.values
            .get(item)
            .map(String::as_str)
            .ok_or_else(|| Error::index_out_of_range(item, self.values.len()))
    }

    /// Parses the value at `item` as a real number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `item` is past the current
    /// value count (reads never pad), or [`Error::Format`] when the stored
    /// text is not a valid real number.
    pub fn get_real(&self, item: usize) -> Result<f64> {
        let text = self.value_at(item)?;
        text.parse().map_err(|_| Error::format("real", text))
    }

    /// Parses the value at `item` as an integer.
    ///
    /// Strict: text holding a fractional number such as `"12.5"` is a
    /// [`Error::Format`], not a truncation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] or [`Error::Format`] as for
    /// [`Node::get_real`].
    pub fn get_int(&self, item: usize) -> Result<i64> {
        let text = self.value_at(item)?;
        text.parse().map_err(|_| Error::format("integer", text))
    }

    /// Parses the value at `item` as a boolean (`true` or `false`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] or [`Error::Format`] as for
    /// [`Node::get_real`].
    pub fn get_bool(&self, item: usize) -> Result<bool> {
        let text = self.value_at(item)?;
        text.parse().map_err(|_| Error::format("boolean", text))
    }

    /// Formats `v` and stores it at position `item`. Never fails.
    pub fn set_real(&mut self, item: usize, v: f64) {
        self.set_value(item, v.to_string());
    }

    /// Formats `v` and stores it at position `item`. Never fails.
    pub fn set_int(&mut self, item: usize, v: i64) {
        self.set_value(item, v.to_string());
    }

    /// Formats `v` and stores it at position `item`. Never fails.
    pub fn set_bool(&mut self, item: usize, v: bool) {
        self.set_value(item, v.to_string());
    }

    /// Returns `true` if this node was parsed from a `#` comment line and
    /// exists only for round-trip fidelity.
    #[inline]
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        self.comment
    }

    /// Returns `true` if this node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node has at least one child.
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of children, comment entries included.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if a property named `name` exists directly under this
    /// node. Comment entries are not addressable by name.
    #[must_use]
    pub fn has_child(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the child property named `name`, without creating it.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&i| &self.children[i].1)
    }

    /// Returns the child property named `name` mutably, without creating it.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.children[i].1),
            None => None,
        }
    }

    /// Returns the child property named `name`, creating an empty one if it
    /// does not exist yet (auto-vivification). New children are appended to
    /// the ordered sequence and registered in the name index. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Node;
    ///
    /// let mut root = Node::new();
    /// root.ensure_child("a").set_value(0, "1");
    /// root.ensure_child("a").set_value(1, "2"); // same child, no sibling
    /// assert_eq!(root.child_count(), 1);
    /// ```
    pub fn ensure_child(&mut self, name: &str) -> &mut Node {
        let i = self.ensure_index(name);
        &mut self.children[i].1
    }

    pub(crate) fn ensure_index(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.children.len();
        self.children.push((name.to_string(), Node::new()));
        self.index.insert(name.to_string(), i);
        i
    }

    /// Replaces the existing child named `name` with `node`, returning the
    /// displaced child. Unlike [`Node::ensure_child`] this never creates:
    /// replacing an unknown name is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChild`] when no property named `name` exists.
    pub fn replace_child(&mut self, name: &str, node: Node) -> Result<Node> {
        match self.index.get(name) {
            Some(&i) => Ok(std::mem::replace(&mut self.children[i].1, node)),
            None => Err(Error::UnknownChild(name.to_string())),
        }
    }

    /// Appends a comment pseudo-property carrying `text` (the full original
    /// line) as its synthetic name. Comments keep their sibling position on
    /// write-back but are never registered in the name index.
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.children.push((text.into(), Node::new_comment()));
    }

    /// Returns an iterator over `(name, child)` pairs in insertion order,
    /// comment entries included.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Returns an iterator over property names in insertion order, comment
    /// entries excluded.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    // Stack frames in the parser address children positionally; the indices
    // always come from ensure_index on the live tree.
    pub(crate) fn child_at_mut(&mut self, i: usize) -> &mut Node {
        &mut self.children[i].1
    }
}
