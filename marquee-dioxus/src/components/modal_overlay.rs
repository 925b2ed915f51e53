//! Reusable modal overlay component.
//!
//! Encapsulates the overlay+backdrop+container pattern used by modal dialogs.

use dioxus::prelude::*;

/// Modal overlay that provides a backdrop and centered container.
///
/// Clicking the backdrop triggers `on_backdrop_click`. Clicks inside the
/// container are stopped from propagating to the backdrop.
#[component]
pub fn ModalOverlay(
    class: Option<&'static str>,
    on_backdrop_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let container_class = match class {
        Some(inner) => format!("modal-container {inner}"),
        None => "modal-container".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onmousedown: move |evt| on_backdrop_click.call(evt),

            div {
                class: "{container_class}",
                onmousedown: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
