use super::*;
use pretty_assertions::assert_eq;

#[test]
fn starts_with_k_and_t() {
    let tree = KTree::default();
    assert_eq!(tree.get(".k"), Some(&Value::Null));
    assert_eq!(tree.get(".t"), Some(&Value::Int(0)));
    assert_eq!(tree.current_branch(), ".k");
    assert!(tree.get(".").and_then(Value::as_dictionary).is_some());
}

#[test]
fn writes_create_intermediate_dictionaries() {
    let mut tree = KTree::default();
    tree.set(".a.b", Value::Int(5));
    assert_eq!(tree.get(".a.b"), Some(&Value::Int(5)));
    assert!(tree.get(".a").and_then(Value::as_dictionary).is_some());
}

#[test]
fn writing_through_a_non_dictionary_replaces_it() {
    let mut tree = KTree::default();
    tree.set(".k.x", Value::Int(1));
    assert_eq!(tree.get(".k.x"), Some(&Value::Int(1)));
    tree.set(".t.y", Value::Int(2));
    assert_eq!(tree.get(".t.y"), Some(&Value::Int(2)));
}

#[test]
fn rewrites_keep_entry_order() {
    let mut tree = KTree::default();
    tree.set(".k", Value::Int(9));
    let keys: Vec<_> = tree.get(".").and_then(Value::as_dictionary).unwrap().keys().collect();
    assert_eq!(keys, vec!["k", "t"]);
}

#[test]
fn relative_paths_join_the_branch() {
    let mut tree = KTree::default();
    assert_eq!(tree.relative("x"), ".k.x");
    tree.set_branch(".a");
    assert_eq!(tree.relative("b"), ".a.b");
    assert!(tree.get(".a").and_then(Value::as_dictionary).is_some());
    tree.set_branch(".");
    assert_eq!(tree.relative("b"), ".b");
}

#[test]
fn parents() {
    assert_eq!(parent(".a.f"), ".a");
    assert_eq!(parent(".f"), ".");
    assert_eq!(join(".", "x"), ".x");
}

#[test]
fn reset_restores_the_initial_tree() {
    let mut tree = KTree::default();
    tree.set(".a.b", Value::Int(1));
    tree.set_branch(".a");
    tree.reset();
    assert_eq!(tree.get(".a"), None);
    assert_eq!(tree.current_branch(), ".k");
    assert!(tree.at_initial_branch());
}
