//! Catalog bar component for displaying the movie collection as tabs.

use dioxus::prelude::*;

use crate::hooks::use_snapshot_signal;
use crate::state::{AppCommand, MovieTab};
use crate::AppState;

/// Catalog bar that displays the movies as clickable tabs.
#[component]
pub fn CatalogBar(tabs: Vec<MovieTab>) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    if tabs.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "catalog-bar",

            for tab in tabs {
                button {
                    key: "{tab.id}",
                    class: if tab.is_current { "catalog-tab current" } else { "catalog-tab" },
                    onclick: {
                        let app_state = app_state.clone();
                        let id = tab.id;
                        move |_| {
                            app_state.send_command(AppCommand::SelectMovie(id));
                            app_state.process_and_notify(&mut snapshot_signal);
                        }
                    },
                    "{tab.title}"
                }
            }
        }
    }
}
