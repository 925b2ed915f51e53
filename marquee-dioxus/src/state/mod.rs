//! Application state management for Dioxus integration.
//!
//! The context lives on the main thread and is never shared with the UI.
//! Components send [`AppCommand`]s over a channel; the context processes them
//! synchronously and publishes an [`AppSnapshot`] for rendering.
//!
//! This module provides:
//! - `AppContext`: the main state owner with command handling
//! - `AppSnapshot`: a read-only snapshot of application state for rendering
//! - `AppCommand`: commands that can be sent to the context

mod types;

pub use types::{
    AppCommand, AppSnapshot, MovieTab, ReviewFormSnapshot, StarSnapshot, StartupAction, MAX_STARS,
};

use std::sync::mpsc;

use crate::catalog::MovieCatalog;
use crate::operations::{CatalogOps, ReviewFormOps};
use crate::review::{ReviewDraft, ReviewStore};

/// The application state owner that lives on the main thread.
pub struct AppContext {
    pub(crate) catalog: MovieCatalog,
    pub(crate) reviews: ReviewStore,
    command_rx: mpsc::Receiver<AppCommand>,

    // Details view state - pub(crate) for operations access
    /// Id of the movie shown in the details view.
    pub(crate) current_movie: Option<u64>,

    // Review modal state - pub(crate) for operations access
    /// Whether the review modal is visible.
    pub(crate) modal_visible: bool,
    /// The form contents being edited.
    pub(crate) draft: ReviewDraft,
    /// Star index under the pointer, for display preview only.
    pub(crate) hover_star: Option<usize>,
    /// Message shown in the modal's error area.
    pub(crate) error_message: Option<String>,

    /// Bumped on every stored review to request the reviews-section scroll.
    pub(crate) reviews_scroll_epoch: u64,
}

impl AppContext {
    /// Create a context over the embedded catalog.
    pub fn new(startup_action: &StartupAction, command_rx: mpsc::Receiver<AppCommand>) -> Self {
        Self::with_catalog(MovieCatalog::load(), startup_action, command_rx)
    }

    /// Create a context over a specific catalog.
    pub fn with_catalog(
        catalog: MovieCatalog,
        startup_action: &StartupAction,
        command_rx: mpsc::Receiver<AppCommand>,
    ) -> Self {
        let first_movie = catalog.all().first().map(|movie| movie.id);
        let current_movie = match startup_action {
            StartupAction::None => first_movie,
            StartupAction::OpenMovie(id) => match catalog.by_id(*id) {
                Some(movie) => Some(movie.id),
                None => {
                    log::warn!("Movie with id {id} not found, opening first catalog entry");
                    first_movie
                }
            },
        };

        Self {
            catalog,
            reviews: ReviewStore::default(),
            command_rx,
            current_movie,
            modal_visible: false,
            draft: ReviewDraft::default(),
            hover_star: None,
            error_message: None,
            reviews_scroll_epoch: 0,
        }
    }

    /// Process pending commands.
    pub fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    /// Handle a single command using operation traits.
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) {
        match cmd {
            // Review modal operations
            AppCommand::OpenReviewModal => self.open_review_modal(),
            AppCommand::CloseReviewModal => self.close_review_modal(),
            AppCommand::SelectStar(index) => self.select_star(index),
            AppCommand::PreviewStar(index) => self.preview_star(index),
            AppCommand::EndPreview => self.end_preview(),
            AppCommand::SetReviewer(value) => self.set_reviewer(value),
            AppCommand::SetComment(value) => self.set_comment(value),
            AppCommand::SubmitReview => self.submit_review(),

            // Catalog operations
            AppCommand::SelectMovie(id) => self.select_movie(id),
        }
    }

    /// Create a snapshot of the current state for rendering.
    pub fn snapshot(&self) -> AppSnapshot {
        let movie = self
            .current_movie
            .and_then(|id| self.catalog.by_id(id))
            .cloned();

        let (reviews, average_rating) = match &movie {
            Some(movie) => (
                self.reviews.for_movie(movie.id).to_vec(),
                self.reviews.average_rating(movie.id),
            ),
            None => (Vec::new(), None),
        };

        let movie_tabs = self
            .catalog
            .all()
            .iter()
            .map(|entry| MovieTab {
                id: entry.id,
                title: entry.movie_name.clone(),
                is_current: Some(entry.id) == self.current_movie,
            })
            .collect();

        AppSnapshot {
            movie_tabs,
            movie,
            reviews,
            average_rating,
            modal_visible: self.modal_visible,
            review_form: ReviewFormSnapshot {
                reviewer: self.draft.reviewer.clone(),
                comment: self.draft.comment.clone(),
                rating: self.draft.rating,
                stars: self.star_display(),
                error_message: self.error_message.clone(),
            },
            reviews_scroll_epoch: self.reviews_scroll_epoch,
        }
    }
}
