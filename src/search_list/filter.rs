//! Case-insensitive substring filtering.

/// Filter labels by case-insensitive substring containment.
///
/// Returns the indices of matching labels in their original order.
/// An empty term matches everything.
///
/// # Example
///
/// ```ignore
/// let labels = vec!["Apple".to_string(), "Banana".to_string()];
/// let matches = substring_filter("an", &labels);
/// // Returns: [1] (only "Banana" contains "an")
/// ```
pub fn substring_filter(term: &str, labels: &[String]) -> Vec<usize> {
    // Empty term matches all items
    if term.is_empty() {
        return (0..labels.len()).collect();
    }

    let needle = term.to_lowercase();
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
