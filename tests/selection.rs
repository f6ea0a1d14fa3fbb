use siftlist::selection::Selection;

#[test]
fn test_toggle_selects_and_deselects() {
    let mut selection = Selection::new();
    assert!(selection.toggle("a"));
    assert!(selection.is_selected("a"));
    assert!(!selection.toggle("a"));
    assert!(!selection.is_selected("a"));
}

#[test]
fn test_double_toggle_is_involution() {
    let mut selection = Selection::new();
    selection.toggle("a");
    selection.toggle("b");
    let before = selection.selected();

    selection.toggle("c");
    selection.toggle("c");
    assert_eq!(selection.selected(), before);
}

#[test]
fn test_selection_is_id_keyed() {
    let mut selection = Selection::new();
    selection.toggle("2");
    // The same logical ID matches regardless of which snapshot produced it
    let fresh_id = String::from("2");
    assert!(selection.is_selected(&fresh_id));
}

#[test]
fn test_selected_is_sorted() {
    let mut selection = Selection::new();
    selection.toggle("b");
    selection.toggle("a");
    selection.toggle("c");
    assert_eq!(selection.selected(), vec!["a", "b", "c"]);
}

#[test]
fn test_clear_returns_deselected_ids() {
    let mut selection = Selection::new();
    selection.toggle("a");
    selection.toggle("b");
    let mut removed = selection.clear();
    removed.sort();
    assert_eq!(removed, vec!["a", "b"]);
    assert!(selection.is_empty());
    assert_eq!(selection.len(), 0);
}
