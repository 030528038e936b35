//! Dotted-path addressing over [`Node`].
//!
//! A path like `"server.listen.port"` names nested children in sequence.
//! This is a thin convenience layer: each segment is an ordinary child
//! lookup, split at the first `.`. Bracketed-index addressing
//! (`"slot[3]"`) is purely a naming convention: the bracketed text is a
//! literal key, and resolves only if the tree actually contains a child
//! with that name.
//!
//! Existence checks ([`Node::has_property`]) never create anything;
//! navigation ([`Node::get_property`]) auto-vivifies every missing segment
//! along the way.
//!
//! ```rust
//! use treefile::Node;
//!
//! let mut root = Node::new();
//! assert!(!root.has_property("server.listen.port"));
//!
//! root.get_property("server.listen.port").set_int(0, 8080);
//! assert!(root.has_property("server.listen.port"));
//! assert!(root.has_property("server.listen"));
//! ```

use crate::node::Node;

impl Node {
    /// Returns `true` if a property exists at the dotted `path` below this
    /// node. Performs no auto-vivification, so it is safe to call on names that may
    /// not exist.
    #[must_use]
    pub fn has_property(&self, path: &str) -> bool {
        match path.split_once('.') {
            Some((head, rest)) => match self.child(head) {
                Some(child) => child.has_property(rest),
                None => false,
            },
            None => self.has_child(path),
        }
    }

    /// Navigates to the node at the dotted `path`, creating every missing
    /// segment as an empty node along the way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefile::Node;
    ///
    /// let mut root = Node::new();
    /// root.get_property("window.size").set_value(0, "800");
    /// assert_eq!(root.child("window").unwrap().child("size").unwrap().value(0), "800");
    /// ```
    pub fn get_property(&mut self, path: &str) -> &mut Node {
        match path.split_once('.') {
            Some((head, rest)) => self.ensure_child(head).get_property(rest),
            None => self.ensure_child(path),
        }
    }

    /// Navigates to `name[index]` under this node, vivifying like
    /// [`Node::get_property`]. The bracketed form is composed as a literal
    /// key string; no numeric indexing takes place.
    pub fn get_indexed_property(&mut self, name: &str, index: usize) -> &mut Node {
        self.get_property(&format!("{name}[{index}]"))
    }
}
