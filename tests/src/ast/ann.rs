//! Annotation behavior: interning, stripping, and the pure add/delete
//! operations.

use jackc_ast::{Ann, NodeStore};

#[test]
fn lists_read_back_in_order() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(
        vec!["first".to_string(), "second".to_string()],
        vec!["careful".to_string()],
        vec![],
    );
    assert_eq!(store.size_of_ann_comments(ann), 2);
    assert_eq!(store.get_ann_comments(ann, 0), "first");
    assert_eq!(store.get_ann_comments(ann, 1), "second");
    assert_eq!(store.size_of_ann_warnings(ann), 1);
    assert_eq!(store.get_ann_warnings(ann, 0), "careful");
    assert_eq!(store.size_of_ann_errors(ann), 0);
}

#[test]
fn empty_strings_are_stripped_on_construction() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(
        vec![String::new(), "kept".to_string(), String::new()],
        vec![],
        vec![],
    );
    assert_eq!(store.size_of_ann_comments(ann), 1);
    assert_eq!(store.get_ann_comments(ann, 0), "kept");
}

#[test]
fn all_empty_lists_intern_to_the_sentinel() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec![String::new()], vec![], vec![]);
    assert_eq!(ann, Ann::EMPTY);
    assert_eq!(store.size_of_ann_comments(Ann::EMPTY), 0);
}

#[test]
fn add_returns_a_new_handle_and_leaves_the_source_alone() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec!["one".to_string()], vec![], vec![]);
    let extended = store.add_ann_comments(ann, "two");

    assert_ne!(ann, extended);
    assert_eq!(store.size_of_ann_comments(ann), 1);
    assert_eq!(store.size_of_ann_comments(extended), 2);
    assert_eq!(store.get_ann_comments(extended, 1), "two");
}

#[test]
fn adding_an_empty_string_is_a_no_op() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec![], vec!["careful".to_string()], vec![]);
    assert_eq!(store.add_ann_warnings(ann, ""), ann);
}

#[test]
fn delete_shifts_later_entries_down() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(
        vec![],
        vec![],
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
    );
    let trimmed = store.delete_ann_errors(ann, 1);
    assert_eq!(store.size_of_ann_errors(trimmed), 2);
    assert_eq!(store.get_ann_errors(trimmed, 0), "a");
    assert_eq!(store.get_ann_errors(trimmed, 1), "c");
    // the source annotation is untouched
    assert_eq!(store.size_of_ann_errors(ann), 3);
}

#[test]
fn deleting_the_last_entry_interns_to_the_sentinel() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec!["only".to_string()], vec![], vec![]);
    let emptied = store.delete_ann_comments(ann, 0);
    assert_eq!(emptied, Ann::EMPTY);
}

#[test]
#[should_panic(expected = "out of range for annotation comments")]
fn delete_past_the_end_panics() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec!["only".to_string()], vec![], vec![]);
    store.delete_ann_comments(ann, 1);
}

#[test]
#[should_panic(expected = "out of range for annotation warnings")]
fn get_past_the_end_panics() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec![], vec!["careful".to_string()], vec![]);
    store.get_ann_warnings(ann, 1);
}

#[test]
fn a_node_keeps_the_annotation_it_was_built_with() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec!["origin".to_string()], vec![], vec![]);
    let node = store.create_int(ann, 42);
    assert_eq!(store.get_ann(node), ann);

    // growing a new annotation from the same handle never touches the node
    let extended = store.add_ann_comments(ann, "later");
    assert_ne!(store.get_ann(node), extended);
    assert_eq!(store.get_ann_comments(store.get_ann(node), 0), "origin");
}
