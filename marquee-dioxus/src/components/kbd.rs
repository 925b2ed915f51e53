//! Reusable keyboard key component.
//!
//! Renders a `<kbd>` element with physical key styling.

use dioxus::prelude::*;

/// A styled keyboard key element.
#[component]
pub fn KbdKey(label: &'static str) -> Element {
    rsx! { kbd { "{label}" } }
}
