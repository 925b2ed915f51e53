//! Review form modal dialog.
//!
//! Name and comment fields, the star selector, an error area for rejected
//! submissions, and cancel/submit buttons. The backdrop and Escape both
//! dismiss it.

use dioxus::prelude::*;

use crate::components::{KbdKey, ModalOverlay, StarRating};
use crate::hooks::use_snapshot_signal;
use crate::state::{AppCommand, ReviewFormSnapshot};
use crate::AppState;

/// The review form modal.
#[component]
pub fn ReviewModal(form: ReviewFormSnapshot) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    let cancel_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(AppCommand::CloseReviewModal);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let submit_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(AppCommand::SubmitReview);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    rsx! {
        ModalOverlay {
            class: "review-modal",
            on_backdrop_click: {
                let mut cancel = cancel_handler.clone();
                move |evt| cancel(evt)
            },

            div {
                class: "review-modal-title",
                "Write a review"
            }

            if let Some(ref message) = form.error_message {
                div {
                    class: "error-message",
                    "{message}"
                }
            }

            div {
                class: "review-field",
                label { r#for: "reviewer", "Your name" }
                input {
                    id: "reviewer",
                    class: "review-input",
                    value: "{form.reviewer}",
                    oninput: {
                        let app_state = app_state.clone();
                        move |evt: FormEvent| {
                            app_state.send_command(AppCommand::SetReviewer(evt.value()));
                            app_state.process_and_notify(&mut snapshot_signal);
                        }
                    },
                }
            }

            div {
                class: "review-field",
                label { "Rating" }
                StarRating { stars: form.stars }
            }

            div {
                class: "review-field",
                label { r#for: "comment", "Your review" }
                textarea {
                    id: "comment",
                    class: "review-input review-comment",
                    rows: "4",
                    value: "{form.comment}",
                    oninput: {
                        let app_state = app_state.clone();
                        move |evt: FormEvent| {
                            app_state.send_command(AppCommand::SetComment(evt.value()));
                            app_state.process_and_notify(&mut snapshot_signal);
                        }
                    },
                }
            }

            div {
                class: "review-modal-buttons",

                button {
                    class: "review-btn review-btn-secondary",
                    onclick: {
                        let mut cancel = cancel_handler.clone();
                        move |evt| cancel(evt)
                    },
                    KbdKey { label: "Esc" }
                    "Cancel"
                }

                button {
                    class: "review-btn review-btn-primary",
                    onclick: submit_handler,
                    "Submit review"
                }
            }
        }
    }
}
