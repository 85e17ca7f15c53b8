//! Interactive host for the find bar
//!
//! Owns the bar, subscribes to its event channel and keeps a log of what it
//! received. It does not search anything; counts are typed in by hand.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::App;
