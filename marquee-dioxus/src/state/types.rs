//! Data types for application state management.
//!
//! Shared data structures used for communication between the application
//! context and the UI components.

use crate::catalog::Movie;
use crate::review::Review;

/// Number of stars in the rating selector.
pub const MAX_STARS: usize = 5;

/// Painted state of a single star in the selector.
///
/// `filled` follows the hover preview; `selected` marks only stars covered by
/// the committed rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarSnapshot {
    pub filled: bool,
    pub selected: bool,
}

/// Movie entry for the catalog bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTab {
    pub id: u64,
    pub title: String,
    pub is_current: bool,
}

/// Snapshot of the review form for the modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFormSnapshot {
    pub reviewer: String,
    pub comment: String,
    /// Committed rating, 1..=5.
    pub rating: Option<u8>,
    pub stars: [StarSnapshot; MAX_STARS],
    pub error_message: Option<String>,
}

/// A snapshot of application state for rendering.
/// This is Clone + Send + Sync so it can be used with Dioxus.
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    // Catalog bar state
    pub movie_tabs: Vec<MovieTab>,

    // Details view state
    pub movie: Option<Movie>,
    pub reviews: Vec<Review>,
    pub average_rating: Option<f64>,

    // Review modal state
    pub modal_visible: bool,
    pub review_form: ReviewFormSnapshot,

    /// Incremented once per stored review; the reviews section scrolls into
    /// view when it changes.
    pub reviews_scroll_epoch: u64,
}

/// Commands that can be sent to the application context.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // Review modal
    OpenReviewModal,
    CloseReviewModal,
    SelectStar(usize),
    PreviewStar(usize),
    EndPreview,
    SetReviewer(String),
    SetComment(String),
    SubmitReview,

    // Catalog
    SelectMovie(u64),
}

/// Determines which movie to show on startup.
#[derive(Debug, Clone)]
pub enum StartupAction {
    /// No argument provided - open the first catalog entry.
    None,
    /// Open a specific movie by id.
    OpenMovie(u64),
}
