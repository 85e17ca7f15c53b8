//! Find-in-page bar
//!
//! A single-line query field, a match counter, previous/next buttons and a
//! close button. The bar does not search anything itself: it relays user
//! actions to a [`FindInPageDelegate`] and displays the counts its owner
//! reports back through `set_current_result` / `set_total_results`.

pub mod delegate;
pub mod find_bar_events;
pub mod find_bar_render;
mod find_bar_state;
mod snapshot;

pub use delegate::{FindEvent, FindInPageDelegate};
pub use find_bar_render::{FIND_BAR_HEIGHT, render_bar};
pub use find_bar_state::{
    FindBarStyles, FindInPageBar, MATCH_COUNT_CAP, SAVED_TEXT_KEY, format_match_count,
    retrieve_saved_text,
};
pub use snapshot::{FindBarSnapshot, SNAPSHOT_VERSION};
