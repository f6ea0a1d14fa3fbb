//! SearchList widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::config::SearchListConfig;
use crate::debounce::Debouncer;
use crate::item::SearchItem;
use crate::selection::Selection;
use crate::wakeup::WakeupHandle;

use super::filter::substring_filter;
use super::render::{Row, project};

/// Unique identifier for a SearchList widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchListId(usize);

impl SearchListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SearchListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__search_list_{}", self.0)
    }
}

/// Internal state for a SearchList widget.
#[derive(Debug)]
struct SearchListInner<T: SearchItem> {
    /// Item store: the current snapshot supplied by the caller.
    items: Vec<T>,
    /// Cached labels, one per item. Absent labels are cached as "".
    labels: Vec<String>,
    /// Current raw search text.
    value: String,
    /// Cursor position in the search text (byte offset).
    text_cursor: usize,
    /// Filtered view: indices into `items`, in store order.
    filtered: Vec<usize>,
    /// ID-keyed selection state.
    selection: Selection,
    /// List cursor: position within `filtered` (focused row).
    cursor: Option<usize>,
    /// Placeholder text shown while the search field is empty.
    placeholder: String,
    /// Incremented every time a filter recompute is applied.
    filter_generation: u64,
}

impl<T: SearchItem> SearchListInner<T> {
    fn with_items(items: Vec<T>, placeholder: String) -> Self {
        let labels = cache_labels(&items);
        let filtered = (0..items.len()).collect();
        Self {
            items,
            labels,
            value: String::new(),
            text_cursor: 0,
            filtered,
            selection: Selection::new(),
            cursor: None,
            placeholder,
            filter_generation: 0,
        }
    }

    /// Clamp the list cursor to the current filtered view.
    fn clamp_cursor(&mut self) {
        if let Some(cursor) = self.cursor
            && cursor >= self.filtered.len()
        {
            self.cursor = self.filtered.len().checked_sub(1);
        }
    }

    /// Recompute the filtered view from the item store and search text.
    fn apply_filter(&mut self) {
        self.filtered = substring_filter(&self.value, &self.labels);
        self.filter_generation += 1;
        self.clamp_cursor();
    }
}

fn cache_labels<T: SearchItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.search_label().unwrap_or_default())
        .collect()
}

/// A searchable, multi-select list with reactive state.
///
/// `SearchList<T>` manages:
/// - a caller-supplied item store (read-only snapshot per [`set_items`] call)
/// - a search text edited keystroke by keystroke
/// - a debounced filter: the visible subset is recomputed only after the
///   user pauses typing for the configured quiet period
/// - an ID-keyed selection set toggled immediately, independent of filtering
///
/// Search text and selection live for the widget's lifetime; dropping the
/// last clone aborts any pending filter recompute.
///
/// [`set_items`]: SearchList::set_items
///
/// # Example
///
/// ```ignore
/// let list = SearchList::with_items(vec![
///     Item::new("1", "Apple"),
///     Item::new("2", "Banana"),
/// ]);
/// list.insert_char('a');
/// list.insert_char('n');
/// // after the quiet period, only "Banana" remains visible
/// ```
#[derive(Debug)]
pub struct SearchList<T: SearchItem> {
    /// Unique identifier for this widget instance
    id: SearchListId,
    /// Internal state
    inner: Arc<RwLock<SearchListInner<T>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Pending filter recompute timer
    debounce: Arc<Debouncer>,
    /// Wakeup signal shared with the event loop
    wakeup: WakeupHandle,
}

impl<T: SearchItem> SearchList<T> {
    /// Create a new empty list with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Vec::new(), SearchListConfig::default())
    }

    /// Create a list with initial items and the default configuration.
    pub fn with_items(items: Vec<T>) -> Self {
        Self::with_config(items, SearchListConfig::default())
    }

    /// Create a list with initial items and an explicit configuration.
    pub fn with_config(items: Vec<T>, config: SearchListConfig) -> Self {
        Self {
            id: SearchListId::new(),
            inner: Arc::new(RwLock::new(SearchListInner::with_items(
                items,
                config.placeholder,
            ))),
            dirty: Arc::new(AtomicBool::new(false)),
            debounce: Arc::new(Debouncer::new(config.debounce)),
            wakeup: WakeupHandle::new(),
        }
    }

    /// Get the unique ID for this widget.
    pub fn id(&self) -> SearchListId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the wakeup handle the widget notifies on state changes.
    ///
    /// The event loop awaits this to re-render when the debounced filter
    /// fires or the widget is mutated from elsewhere.
    pub fn wakeup_handle(&self) -> WakeupHandle {
        self.wakeup.clone()
    }

    // -------------------------------------------------------------------------
    // Item store
    // -------------------------------------------------------------------------

    /// Get the number of items in the store.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.items.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all items in the store.
    pub fn items(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.items.clone())
            .unwrap_or_default()
    }

    /// Replace the item store with a new snapshot.
    ///
    /// Synchronously resets the filtered view to the full, unfiltered set;
    /// the search text is kept and re-applies on the next edit. Selection is
    /// left untouched: IDs missing from the new snapshot simply never match,
    /// and match again if their item returns.
    pub fn set_items(&self, items: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.labels = cache_labels(&items);
            guard.items = items;
            guard.filtered = (0..guard.items.len()).collect();
            guard.clamp_cursor();
            debug!(
                "{}: item store replaced ({} items)",
                self.id,
                guard.items.len()
            );
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Search text
    // -------------------------------------------------------------------------

    /// Get the current search text.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Set the search text and schedule a debounced filter recompute.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.text_cursor = guard.value.len();
            self.mark_dirty();
        }
        self.schedule_refilter();
    }

    /// Reset the search text to empty.
    ///
    /// Selection is untouched; search and selection are independent axes.
    /// The full view comes back through the normal debounced path, matching
    /// typing semantics.
    pub fn clear_search(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.text_cursor = 0;
            self.mark_dirty();
        }
        self.schedule_refilter();
    }

    /// Check if the search text is empty.
    pub fn is_search_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the text cursor position (byte offset).
    pub fn text_cursor(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.text_cursor)
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Text manipulation (called on key events)
    // -------------------------------------------------------------------------

    /// Insert a character at the text cursor.
    pub fn insert_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.text_cursor;
            guard.value.insert(cursor, c);
            guard.text_cursor += c.len_utf8();
            self.mark_dirty();
        }
        self.schedule_refilter();
    }

    /// Delete the character before the text cursor (backspace).
    ///
    /// Returns whether a character was removed; with the cursor at the start
    /// this is a no-op and no recompute is scheduled.
    pub fn delete_char_before(&self) -> bool {
        let mut edited = false;
        if let Ok(mut guard) = self.inner.write()
            && guard.text_cursor > 0
        {
            let prev_cursor = guard.value[..guard.text_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev_cursor);
            guard.text_cursor = prev_cursor;
            edited = true;
            self.mark_dirty();
        }
        if edited {
            self.schedule_refilter();
        }
        edited
    }

    /// Delete the character at the text cursor (delete key).
    ///
    /// Returns whether a character was removed; with the cursor at the end
    /// this is a no-op and no recompute is scheduled.
    pub fn delete_char_at(&self) -> bool {
        let mut edited = false;
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.text_cursor;
            if cursor < guard.value.len() {
                guard.value.remove(cursor);
                edited = true;
                self.mark_dirty();
            }
        }
        if edited {
            self.schedule_refilter();
        }
        edited
    }

    /// Move the text cursor left.
    pub fn text_cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.text_cursor > 0
        {
            guard.text_cursor = guard.value[..guard.text_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.mark_dirty();
        }
    }

    /// Move the text cursor right.
    pub fn text_cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.text_cursor < guard.value.len()
        {
            guard.text_cursor = guard.value[guard.text_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.text_cursor + i)
                .unwrap_or(guard.value.len());
            self.mark_dirty();
        }
    }

    /// Move the text cursor to the start.
    pub fn text_cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.text_cursor != 0
        {
            guard.text_cursor = 0;
            self.mark_dirty();
        }
    }

    /// Move the text cursor to the end.
    pub fn text_cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.text_cursor != end {
                guard.text_cursor = end;
                self.mark_dirty();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Filtered view
    // -------------------------------------------------------------------------

    /// Get the filtered view as indices into the item store.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|guard| guard.filtered.clone())
            .unwrap_or_default()
    }

    /// Get the number of visible (filtered) items.
    pub fn filtered_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.filtered.len())
            .unwrap_or(0)
    }

    /// Get the visible items, in store order.
    pub fn filtered_items(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .filtered
                    .iter()
                    .filter_map(|&i| guard.items.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of filter recomputes applied so far.
    ///
    /// Each debounce firing (and nothing else) increments this, which makes
    /// "exactly one recompute per quiet period" observable.
    pub fn filter_generation(&self) -> u64 {
        self.inner
            .read()
            .map(|guard| guard.filter_generation)
            .unwrap_or(0)
    }

    /// Check whether a filter recompute is scheduled but not yet applied.
    pub fn refilter_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Schedule a debounced filter recompute.
    ///
    /// Cancels any pending recompute; the new one reads the search text at
    /// the moment it fires, so only the latest value is ever applied.
    fn schedule_refilter(&self) {
        let id = self.id;
        let inner = Arc::clone(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let wakeup = self.wakeup.clone();
        self.debounce.schedule(async move {
            if let Ok(mut guard) = inner.write() {
                guard.apply_filter();
                debug!(
                    "{}: filter applied, {} of {} items visible",
                    id,
                    guard.filtered.len(),
                    guard.items.len()
                );
                dirty.store(true, Ordering::SeqCst);
            }
            wakeup.notify();
        });
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get all selected IDs (sorted).
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.selection.selected())
            .unwrap_or_default()
    }

    /// Check if an item ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Toggle selection of an item by ID.
    ///
    /// Immediate, never debounced. Returns `true` if the item is selected
    /// after the toggle.
    pub fn toggle(&self, id: &str) -> bool {
        let mut selected = false;
        if let Ok(mut guard) = self.inner.write() {
            selected = guard.selection.toggle(id);
            debug!(
                "{}: toggled {:?} -> {}",
                self.id,
                id,
                if selected { "selected" } else { "deselected" }
            );
            self.mark_dirty();
        }
        selected
    }

    /// Toggle selection of the row under the list cursor.
    ///
    /// Returns the item's ID and its new selection state, or `None` when the
    /// cursor is not on a row.
    pub fn toggle_at_cursor(&self) -> Option<(String, bool)> {
        let id = self.inner.read().ok().and_then(|guard| {
            guard
                .cursor
                .and_then(|c| guard.filtered.get(c))
                .and_then(|&i| guard.items.get(i))
                .map(|item| item.search_id())
        })?;
        let selected = self.toggle(&id);
        Some((id, selected))
    }

    /// Deselect everything. Returns the IDs that were deselected.
    pub fn deselect_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let removed = guard.selection.clear();
            if !removed.is_empty() {
                self.mark_dirty();
            }
            return removed;
        }
        Vec::new()
    }

    // -------------------------------------------------------------------------
    // List cursor
    // -------------------------------------------------------------------------

    /// Get the list cursor position (within the filtered view).
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| guard.cursor)
    }

    /// Set the list cursor position.
    pub fn set_cursor(&self, index: usize) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let previous = guard.cursor;
            if index < guard.filtered.len() && previous != Some(index) {
                guard.cursor = Some(index);
                self.mark_dirty();
            }
            return previous;
        }
        None
    }

    /// Move the list cursor up. Returns (previous, current) on movement.
    pub fn cursor_up(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut guard) = self.inner.write() {
            let previous = guard.cursor;
            if let Some(cursor) = guard.cursor {
                if cursor > 0 {
                    guard.cursor = Some(cursor - 1);
                    self.mark_dirty();
                    return Some((previous, cursor - 1));
                }
            } else if !guard.filtered.is_empty() {
                guard.cursor = Some(0);
                self.mark_dirty();
                return Some((None, 0));
            }
        }
        None
    }

    /// Move the list cursor down. Returns (previous, current) on movement.
    pub fn cursor_down(&self) -> Option<(Option<usize>, usize)> {
        if let Ok(mut guard) = self.inner.write() {
            let previous = guard.cursor;
            let max_index = guard.filtered.len().saturating_sub(1);
            if let Some(cursor) = guard.cursor {
                if cursor < max_index {
                    guard.cursor = Some(cursor + 1);
                    self.mark_dirty();
                    return Some((previous, cursor + 1));
                }
            } else if !guard.filtered.is_empty() {
                guard.cursor = Some(0);
                self.mark_dirty();
                return Some((None, 0));
            }
        }
        None
    }

    // -------------------------------------------------------------------------
    // Render projection
    // -------------------------------------------------------------------------

    /// Project the current (filtered view × selection set) into rows.
    ///
    /// Pure read of the current state; row order follows the filtered view.
    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|guard| project(&guard.items, &guard.filtered, &guard.selection))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the widget state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.wakeup.notify();
    }
}

impl<T: SearchItem> Clone for SearchList<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            debounce: Arc::clone(&self.debounce),
            wakeup: self.wakeup.clone(),
        }
    }
}

impl<T: SearchItem> Default for SearchList<T> {
    fn default() -> Self {
        Self::new()
    }
}
