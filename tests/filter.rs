use siftlist::search_list::substring_filter;

#[test]
fn test_empty_term_returns_all() {
    let labels = vec!["apple".to_string(), "banana".to_string()];
    let matches = substring_filter("", &labels);
    assert_eq!(matches, vec![0, 1]);
}

#[test]
fn test_substring_matching() {
    let labels = vec![
        "Apple".to_string(),
        "Banana".to_string(),
        "Cherry".to_string(),
    ];
    // "an" appears in "Banana" only; "Apple" has no "an"
    let matches = substring_filter("an", &labels);
    assert_eq!(matches, vec![1]);
}

#[test]
fn test_case_insensitive() {
    let labels = vec!["Apple".to_string(), "BANANA".to_string()];
    assert_eq!(substring_filter("apple", &labels), vec![0]);
    assert_eq!(substring_filter("BaNaN", &labels), vec![1]);
}

#[test]
fn test_no_matches() {
    let labels = vec!["apple".to_string(), "banana".to_string()];
    assert!(substring_filter("xyz", &labels).is_empty());
}

#[test]
fn test_order_preserved() {
    let labels = vec![
        "pear".to_string(),
        "grape".to_string(),
        "pepper".to_string(),
    ];
    // All contain "pe"; order must follow the input, not match quality
    assert_eq!(substring_filter("pe", &labels), vec![0, 1, 2]);
}

#[test]
fn test_blank_label_matches_only_empty_term() {
    let labels = vec!["".to_string(), "apple".to_string()];
    assert_eq!(substring_filter("", &labels), vec![0, 1]);
    assert_eq!(substring_filter("a", &labels), vec![1]);
}
