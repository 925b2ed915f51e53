//! Reviews section of the movie details view.
//!
//! Lists the session's reviews for the current movie and hosts the
//! "Write a review" button. After a review is stored the section scrolls
//! itself into view.

use dioxus::prelude::*;

use crate::components::StarGlyphs;
use crate::hooks::use_snapshot_signal;
use crate::review::Review;
use crate::state::AppCommand;
use crate::AppState;

/// Smooth-scrolls the reviews section into view after a short delay, giving
/// the modal close a frame to settle first.
const SCROLL_TO_REVIEWS_JS: &str = r#"
    setTimeout(() => {
        const section = document.querySelector('.reviews-section');
        if (section) {
            section.scrollIntoView({ behavior: 'smooth', block: 'start' });
        }
    }, 100);
"#;

/// Reviews list with header and review-form trigger.
#[component]
pub fn ReviewsSection(reviews: Vec<Review>, average_rating: Option<f64>) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    // One scroll per stored review, none otherwise.
    let mut seen_epoch = use_signal(|| 0_u64);
    use_effect(move || {
        let epoch = snapshot_signal.read().reviews_scroll_epoch;
        if epoch != *seen_epoch.peek() {
            seen_epoch.set(epoch);
            if epoch > 0 {
                document::eval(SCROLL_TO_REVIEWS_JS);
            }
        }
    });

    let open_handler = {
        let app_state = app_state.clone();
        move |_| {
            app_state.send_command(AppCommand::OpenReviewModal);
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let review_count = reviews.len();

    rsx! {
        section {
            class: "reviews-section",

            div {
                class: "reviews-header",

                h2 { "Reviews ({review_count})" }

                if let Some(average) = average_rating {
                    span {
                        class: "reviews-average",
                        "★ {average:.1} average"
                    }
                }

                button {
                    class: "review-btn review-btn-primary",
                    onclick: open_handler,
                    "Write a review"
                }
            }

            if reviews.is_empty() {
                div {
                    class: "reviews-empty",
                    "No reviews yet. Be the first to review this movie!"
                }
            } else {
                for (index, review) in reviews.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "review-card",

                        div {
                            class: "review-card-header",
                            span { class: "review-card-reviewer", "{review.reviewer}" }
                            StarGlyphs { rating: review.rating }
                        }

                        p {
                            class: "review-card-comment",
                            "{review.comment}"
                        }
                    }
                }
            }
        }
    }
}
