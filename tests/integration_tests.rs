use treefile::{from_str, read, to_string, tree, write, Error, Node, Options};

const SAMPLE: &str = "\
name = Alice
tags = red, \"a,b\", blue
sub
{
\tx = 1
}
";

#[test]
fn test_end_to_end_sample() {
    let mut root = from_str(SAMPLE).unwrap();

    assert_eq!(root.get_property("name").value(0), "Alice");

    let tags = root.get_property("tags");
    assert_eq!(tags.value_count(), 3);
    let values: Vec<_> = tags.values().collect();
    assert_eq!(values, vec!["red", "a,b", "blue"]);

    assert_eq!(root.get_property("sub.x").get_int(0).unwrap(), 1);
}

#[test]
fn test_order_preservation() {
    let root = from_str("zulu = 1\nalpha = 2\nmike = 3").unwrap();
    let order: Vec<_> = root.children().map(|(name, _)| name).collect();
    assert_eq!(order, vec!["zulu", "alpha", "mike"]);

    // lookup does not reorder
    assert!(root.has_child("alpha"));
    let order_after: Vec<_> = root.children().map(|(name, _)| name).collect();
    assert_eq!(order_after, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_comment_fidelity() {
    let source = "\
# header comment
a = 1
# between
b = 2
";
    let root = from_str(source).unwrap();
    assert_eq!(root.child_count(), 4);

    let rendered = to_string(&root);
    assert_eq!(rendered, source);

    let reparsed = from_str(&rendered).unwrap();
    assert_eq!(root, reparsed);
}

#[test]
fn test_quoting_roundtrip() {
    let root = tree! { "v" => ["a,b"] };
    let rendered = to_string(&root);
    assert_eq!(rendered, "v = \"a,b\"\n");

    let back = from_str(&rendered).unwrap();
    let v = back.child("v").unwrap();
    assert_eq!(v.value_count(), 1);
    assert_eq!(v.value(0), "a,b");
}

#[test]
fn test_autovivification_vs_existence_check() {
    let mut root = Node::new();

    assert!(!root.has_property("x.y.z"));
    assert_eq!(root.child_count(), 0);

    root.get_property("x.y.z");
    assert!(root.has_property("x.y.z"));
    assert!(root.child("x").unwrap().child("y").unwrap().has_child("z"));
}

#[test]
fn test_duplicate_names_merge_on_reparse() {
    let root = from_str("a = 1\nb = 2\na = 3, 4").unwrap();
    assert_eq!(root.child_count(), 2);

    let a = root.child("a").unwrap();
    assert_eq!(a.value(0), "3");
    assert_eq!(a.value(1), "4");

    // order stays fixed at first creation
    let order: Vec<_> = root.children().map(|(name, _)| name).collect();
    assert_eq!(order, vec!["a", "b"]);
}

#[test]
fn test_unbalanced_close_is_an_error() {
    let result = from_str("sub\n{\na = 1\n}\n}\n");
    assert_eq!(result, Err(Error::UnbalancedClose { line: 5 }));
}

#[test]
fn test_deep_nesting_roundtrip() {
    let root = tree! {
        "app" => {
            "window" => {
                "size" => ["800", "600"],
                "title" => "demo"
            },
            "theme" => {
                "colors" => {
                    "fg" => "white",
                    "bg" => "black"
                }
            }
        },
        "version" => 3
    };

    let rendered = to_string(&root);
    let reparsed = from_str(&rendered).unwrap();
    assert_eq!(root, reparsed);

    // rendering a reparsed tree is a fixed point
    assert_eq!(to_string(&reparsed), rendered);
}

#[test]
fn test_mutate_then_write_back() {
    let mut root = from_str(SAMPLE).unwrap();
    root.get_property("name").set_value(0, "Bob");
    root.get_property("sub.x").set_int(0, 2);
    root.get_property("sub.y").set_bool(0, true);

    let rendered = to_string(&root);
    let mut back = from_str(&rendered).unwrap();
    assert_eq!(back.get_property("name").value(0), "Bob");
    assert_eq!(back.get_property("sub.x").get_int(0).unwrap(), 2);
    assert!(back.get_property("sub.y").get_bool(0).unwrap());
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.tree");

    let root = from_str(SAMPLE).unwrap();
    write(&root, &path).unwrap();

    let back = read(&path).unwrap();
    assert_eq!(root, back);
}

#[test]
fn test_file_roundtrip_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.tree");
    let options = Options::new().with_separator(';').with_indent("  ");

    let root = tree! {
        "tags" => ["a,b", "c"],
        "sub" => { "x" => 1 }
    };
    treefile::write_with_options(&root, &path, &options).unwrap();

    let back = treefile::read_with_options(&path, &options).unwrap();
    assert_eq!(root, back);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read(dir.path().join("missing.tree"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_write_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = tree! { "a" => 1 };
    // the parent directory does not exist
    let result = write(&root, dir.path().join("no/such/dir/config.tree"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_json_export_via_serde() {
    let root = from_str(SAMPLE).unwrap();
    let json = serde_json::to_string(&root).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(root, back);
}

#[test]
fn test_replace_child_preserves_position() {
    let mut root = from_str("a = 1\nb = 2\nc = 3").unwrap();

    let replacement = tree! { "inner" => "x" };
    root.replace_child("b", replacement).unwrap();

    let order: Vec<_> = root.children().map(|(name, _)| name).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
    assert!(root.child("b").unwrap().has_children());

    assert_eq!(
        root.replace_child("d", Node::new()),
        Err(Error::UnknownChild("d".to_string()))
    );
}
