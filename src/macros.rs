#[macro_export]
macro_rules! tree {
    // Handle empty tree
    () => {
        $crate::Node::new()
    };

    // Handle key/value entries
    ( $($key:literal => $value:tt),+ $(,)? ) => {{
        let mut root = $crate::Node::new();
        $(
            $crate::tree_entry!(root, $key, $value);
        )+
        root
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! tree_entry {
    // Value lists fill sequential indices
    ($node:expr, $key:literal, [ $($item:expr),* $(,)? ]) => {{
        let child = $node.ensure_child($key);
        let values: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$($item.to_string()),*];
        for (item, value) in values.into_iter().enumerate() {
            child.set_value(item, value);
        }
    }};

    // Nested groups recurse
    ($node:expr, $key:literal, { $($k:literal => $v:tt),* $(,)? }) => {{
        let child = $node.ensure_child($key);
        $(
            $crate::tree_entry!(child, $k, $v);
        )*
        let _ = child;
    }};

    // Single scalar value, formatted via ToString
    ($node:expr, $key:literal, $value:expr) => {
        $node.ensure_child($key).set_value(0, $value.to_string())
    };
}
