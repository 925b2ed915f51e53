//! Interactive 1-5 star selector.
//!
//! Clicking a star commits a rating; hovering previews one without
//! committing; leaving the row restores the committed display.

use dioxus::prelude::*;

use crate::hooks::use_snapshot_signal;
use crate::state::{AppCommand, StarSnapshot, MAX_STARS};
use crate::AppState;

/// Star selector row for the review form.
#[component]
pub fn StarRating(stars: [StarSnapshot; MAX_STARS]) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    let leave_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(AppCommand::EndPreview);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    rsx! {
        div {
            class: "star-rating",
            onmouseleave: leave_handler,

            for (index, star) in stars.into_iter().enumerate() {
                span {
                    key: "{index}",
                    class: if star.selected { "star selected" } else { "star" },
                    onclick: {
                        let app_state = app_state.clone();
                        move |_| {
                            app_state.send_command(AppCommand::SelectStar(index));
                            app_state.process_and_notify(&mut snapshot_signal);
                        }
                    },
                    onmouseenter: {
                        let app_state = app_state.clone();
                        move |_| {
                            app_state.send_command(AppCommand::PreviewStar(index));
                            app_state.process_and_notify(&mut snapshot_signal);
                        }
                    },

                    if star.filled { "★" } else { "☆" }
                }
            }
        }
    }
}

/// Read-only star glyphs for a stored review.
#[component]
pub fn StarGlyphs(rating: u8) -> Element {
    let rating = usize::from(rating.min(5));
    let glyphs: String = (0..MAX_STARS)
        .map(|index| if index < rating { '★' } else { '☆' })
        .collect();

    rsx! {
        span { class: "star-glyphs", "{glyphs}" }
    }
}
