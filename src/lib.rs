//! siftlist - a searchable, debounced, multi-select list widget for the
//! terminal.
//!
//! One widget, three cooperating pieces of state:
//! - an item store supplied by the caller as read-only snapshots
//! - a search text edited per keystroke, with a debounced filter recompute
//!   that fires only after a quiet period
//! - an ID-keyed selection set toggled immediately, independent of filtering
//!
//! The rendered list is a pure projection of (filtered view × selection
//! set). See [`search_list::SearchList`].

pub mod config;
pub mod debounce;
pub mod error;
pub mod item;
pub mod runner;
pub mod search_list;
pub mod selection;
pub mod terminal;
pub mod wakeup;

pub mod prelude {
    pub use crate::config::SearchListConfig;
    pub use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
    pub use crate::error::RunnerError;
    pub use crate::item::{Item, SearchItem};
    pub use crate::search_list::{
        CursorMoveEvent, EventResult, Row, SearchChangeEvent, SearchList, SearchListEvents,
        SearchListId, SelectionChangeEvent,
    };
    pub use crate::selection::Selection;
}
