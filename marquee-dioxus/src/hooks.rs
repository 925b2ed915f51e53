//! Custom Dioxus hooks for marquee components.

use dioxus::prelude::*;

use crate::state::AppSnapshot;

/// Get the snapshot signal for writing (e.g., after processing commands).
///
/// Use this in components that need to update the snapshot after sending commands.
#[must_use]
pub fn use_snapshot_signal() -> Signal<AppSnapshot> {
    use_context::<Signal<AppSnapshot>>()
}
