//! Event handling for the SearchList widget.
//!
//! Key events map onto the two independent axes of state:
//! - printable characters, Backspace, Delete and text-cursor keys edit the
//!   search text (each edit reschedules the debounced filter)
//! - Up/Down move the list cursor and Enter toggles the focused row
//!   (immediate, never debounced)
//! - Esc is the Clear affordance: it resets the search text only

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::item::SearchItem;

use super::state::SearchList;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Event fired when the search text changes.
#[derive(Debug, Clone)]
pub struct SearchChangeEvent {
    /// The search text after the change.
    pub value: String,
}

/// Event fired when the selection changes.
#[derive(Debug, Clone)]
pub struct SelectionChangeEvent {
    /// The ID whose selection state was toggled.
    pub id: String,
    /// Whether that ID is selected after the toggle.
    pub selected: bool,
    /// All currently selected IDs.
    pub selected_ids: Vec<String>,
}

/// Event fired when the list cursor moves.
#[derive(Debug, Clone)]
pub struct CursorMoveEvent {
    /// Previous cursor position (None if no previous cursor).
    pub previous: Option<usize>,
    /// Current cursor position.
    pub current: usize,
}

/// Pending events to be dispatched after input handling.
#[derive(Debug, Clone, Default)]
pub struct SearchListEvents {
    pub search_change: Option<SearchChangeEvent>,
    pub selection_change: Option<SelectionChangeEvent>,
    pub cursor_move: Option<CursorMoveEvent>,
}

impl<T: SearchItem> SearchList<T> {
    /// Handle a keyboard event. Returns events that should be dispatched.
    pub fn handle_key(&self, key: &KeyEvent) -> (EventResult, SearchListEvents) {
        let mut events = SearchListEvents::default();

        // Keys with ctrl/alt belong to the host (e.g. Ctrl+C to quit)
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return (EventResult::Ignored, events);
        }

        match key.code {
            // -- list cursor and selection --------------------------------
            KeyCode::Up => {
                if let Some((previous, current)) = self.cursor_up() {
                    events.cursor_move = Some(CursorMoveEvent { previous, current });
                }
                (EventResult::Consumed, events)
            }
            KeyCode::Down => {
                if let Some((previous, current)) = self.cursor_down() {
                    events.cursor_move = Some(CursorMoveEvent { previous, current });
                }
                (EventResult::Consumed, events)
            }
            KeyCode::Enter => {
                if let Some((id, selected)) = self.toggle_at_cursor() {
                    events.selection_change = Some(SelectionChangeEvent {
                        id,
                        selected,
                        selected_ids: self.selected_ids(),
                    });
                }
                (EventResult::Consumed, events)
            }

            // -- clear affordance -----------------------------------------
            KeyCode::Esc => {
                self.clear_search();
                events.search_change = Some(SearchChangeEvent {
                    value: String::new(),
                });
                (EventResult::Consumed, events)
            }

            // -- search text editing --------------------------------------
            KeyCode::Char(c) => {
                self.insert_char(c);
                events.search_change = Some(SearchChangeEvent {
                    value: self.value(),
                });
                (EventResult::Consumed, events)
            }
            KeyCode::Backspace => {
                // No change event when the cursor is at the start
                if self.delete_char_before() {
                    events.search_change = Some(SearchChangeEvent {
                        value: self.value(),
                    });
                }
                (EventResult::Consumed, events)
            }
            KeyCode::Delete => {
                if self.delete_char_at() {
                    events.search_change = Some(SearchChangeEvent {
                        value: self.value(),
                    });
                }
                (EventResult::Consumed, events)
            }
            KeyCode::Left => {
                self.text_cursor_left();
                (EventResult::Consumed, events)
            }
            KeyCode::Right => {
                self.text_cursor_right();
                (EventResult::Consumed, events)
            }
            KeyCode::Home => {
                self.text_cursor_home();
                (EventResult::Consumed, events)
            }
            KeyCode::End => {
                self.text_cursor_end();
                (EventResult::Consumed, events)
            }

            _ => (EventResult::Ignored, events),
        }
    }
}
