//! Main application component.
//!
//! This is the root Dioxus component that composes the catalog bar, the
//! movie details view, and the review modal.

use dioxus::prelude::*;

use crate::components::{CatalogBar, MovieDetails, ReviewModal, ReviewsSection};
use crate::input::translate_key_event;
use crate::keybindings::handle_review_modal_mode;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    // Get app state from context
    let app_state = use_context::<AppState>();

    // Provide the snapshot signal that components subscribe to
    let mut snapshot_signal = use_context_provider(|| Signal::new(app_state.get_snapshot()));

    // Auto-focus the app container on mount so key events arrive immediately
    use_effect(|| {
        document::eval(
            r#"
            requestAnimationFrame(() => {
                const container = document.querySelector('.app-container');
                if (container) {
                    container.focus();
                }
            });
        "#,
        );
    });

    // Clone app_state for the closure
    let app_state_for_handler = app_state.clone();

    // Handle keyboard input at the app level
    let onkeydown = move |evt: KeyboardEvent| {
        let Some(key_event) = translate_key_event(&evt) else {
            return;
        };

        let snapshot = app_state_for_handler.get_snapshot();
        let commands = if snapshot.modal_visible {
            handle_review_modal_mode(&key_event)
        } else {
            vec![]
        };

        if commands.is_empty() {
            return;
        }

        log::debug!("Dispatching {commands:?}");
        for cmd in commands {
            app_state_for_handler.send_command(cmd);
        }
        app_state_for_handler.process_and_notify(&mut snapshot_signal);

        // Prevent default browser behavior for handled keys
        evt.prevent_default();
    };

    // Read through the signal so this component re-renders on changes
    let snapshot = snapshot_signal.read().clone();

    let window_title = match &snapshot.movie {
        Some(movie) => format!("Marquee - {}", movie.movie_name),
        None => "Marquee".to_string(),
    };

    rsx! {
        document::Title { "{window_title}" }
        document::Style { "{app_state.font_css}" }

        div {
            class: "app-container",
            tabindex: 0,
            onkeydown: onkeydown,

            CatalogBar { tabs: snapshot.movie_tabs.clone() }

            // Details scroll area; locked while the modal is open
            div {
                class: if snapshot.modal_visible { "details-scroll scroll-locked" } else { "details-scroll" },

                if let Some(movie) = snapshot.movie.clone() {
                    MovieDetails { movie }
                    ReviewsSection {
                        reviews: snapshot.reviews.clone(),
                        average_rating: snapshot.average_rating,
                    }
                } else {
                    div {
                        class: "catalog-empty",
                        "The catalog is empty."
                    }
                }
            }

            // Review modal (shown when open)
            if snapshot.modal_visible {
                ReviewModal { form: snapshot.review_form.clone() }
            }
        }
    }
}
