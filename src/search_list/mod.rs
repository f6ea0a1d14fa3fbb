//! SearchList widget - a searchable, multi-select list with reactive state.

pub mod events;
pub mod filter;
pub mod render;
mod state;

pub use events::{
    CursorMoveEvent, EventResult, SearchChangeEvent, SearchListEvents, SelectionChangeEvent,
};
pub use filter::substring_filter;
pub use render::{Row, project};
pub use state::{SearchList, SearchListId};
