use treefile::{from_str, to_string, tree, Node};

#[test]
fn test_macro_builds_flat_tree() {
    let root = tree! {
        "host" => "localhost",
        "port" => 8080,
        "debug" => false
    };

    assert_eq!(root.child_count(), 3);
    assert_eq!(root.child("host").unwrap().value(0), "localhost");
    assert_eq!(root.child("port").unwrap().get_int(0).unwrap(), 8080);
    assert!(!root.child("debug").unwrap().get_bool(0).unwrap());
}

#[test]
fn test_macro_builds_nested_tree() {
    let root = tree! {
        "server" => {
            "listen" => {
                "host" => "0.0.0.0",
                "port" => 80
            },
            "workers" => 4
        }
    };

    assert!(root.has_property("server.listen.host"));
    assert!(root.has_property("server.workers"));
    assert!(!root.has_property("server.listen.backlog"));
}

#[test]
fn test_macro_value_lists() {
    let root = tree! {
        "mixed" => ["text", 42, 2.5, true]
    };

    let mixed = root.child("mixed").unwrap();
    assert_eq!(mixed.value_count(), 4);
    assert_eq!(mixed.value(0), "text");
    assert_eq!(mixed.get_int(1).unwrap(), 42);
    assert_eq!(mixed.get_real(2).unwrap(), 2.5);
    assert!(mixed.get_bool(3).unwrap());
}

#[test]
fn test_macro_output_matches_parsed_equivalent() {
    let built = tree! {
        "name" => "Alice",
        "sub" => { "x" => 1 }
    };

    let parsed = from_str("name = Alice\nsub\n{\n\tx = 1\n}\n").unwrap();
    assert_eq!(built, parsed);
    assert_eq!(to_string(&built), to_string(&parsed));
}

#[test]
fn test_macro_empty_forms() {
    let root: Node = tree!();
    assert!(root.is_leaf());

    let root = tree! { "group" => {} };
    let group = root.child("group").unwrap();
    assert!(group.is_leaf());
    assert_eq!(group.value_count(), 0);
}
