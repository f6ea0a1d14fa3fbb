//! Widget configuration types.

use std::time::Duration;

use crate::debounce::DEFAULT_DEBOUNCE;

/// Configuration for a [`SearchList`] widget.
///
/// [`SearchList`]: crate::search_list::SearchList
#[derive(Debug, Clone)]
pub struct SearchListConfig {
    /// Quiet period before a search edit triggers a filter recompute.
    pub debounce: Duration,

    /// Placeholder text shown while the search field is empty.
    pub placeholder: String,
}

impl Default for SearchListConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            placeholder: String::new(),
        }
    }
}

impl SearchListConfig {
    /// Create a config with the default debounce and the given placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Set the debounce quiet period.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }
}
