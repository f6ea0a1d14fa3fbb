//! SearchItem trait for items that can be displayed in a SearchList.

/// Trait for items that can be displayed and filtered in a [`SearchList`].
///
/// [`SearchList`]: crate::search_list::SearchList
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl SearchItem for Country {
///     fn search_id(&self) -> String {
///         self.code.clone()
///     }
///
///     fn search_label(&self) -> Option<String> {
///         Some(self.name.clone())
///     }
/// }
/// ```
pub trait SearchItem: Send + Sync + Clone + 'static {
    /// Unique, stable identifier for this item.
    ///
    /// Selection state is keyed by this ID, so it must stay stable across
    /// item-store snapshots. Array position or object identity will not do.
    fn search_id(&self) -> String;

    /// Display text for this item, also used as the search key.
    ///
    /// `None` is treated as the empty string: it matches only an empty
    /// search term and renders blank.
    fn search_label(&self) -> Option<String>;
}

/// A ready-made item: an ID paired with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique, stable identity.
    pub id: String,
    /// Display + search key. Absent names are rendered as blank.
    pub name: Option<String>,
}

impl Item {
    /// Create an item with an ID and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Create an item with no display name.
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

impl SearchItem for Item {
    fn search_id(&self) -> String {
        self.id.clone()
    }

    fn search_label(&self) -> Option<String> {
        self.name.clone()
    }
}

// Implement for String (the string is both ID and label)
impl SearchItem for String {
    fn search_id(&self) -> String {
        self.clone()
    }

    fn search_label(&self) -> Option<String> {
        Some(self.clone())
    }
}

// Implement for &str
impl SearchItem for &'static str {
    fn search_id(&self) -> String {
        (*self).to_string()
    }

    fn search_label(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

// Implement for (id, label) tuples
impl<S1, S2> SearchItem for (S1, S2)
where
    S1: AsRef<str> + Send + Sync + Clone + 'static,
    S2: AsRef<str> + Send + Sync + Clone + 'static,
{
    fn search_id(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn search_label(&self) -> Option<String> {
        Some(self.1.as_ref().to_string())
    }
}
