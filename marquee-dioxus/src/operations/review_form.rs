//! Review form operations.
//!
//! Extension trait implementing the review modal behavior: visibility, star
//! selection with hover preview, and submission.

use crate::review::{validate_review, ReviewError};
use crate::state::{AppContext, StarSnapshot, MAX_STARS};

/// Extension trait for the review form.
pub trait ReviewFormOps {
    /// Show the modal.
    fn open_review_modal(&mut self);
    /// Hide the modal, clear any error message, and reset the draft.
    /// Idempotent.
    fn close_review_modal(&mut self);
    /// Commit a rating of `index + 1` stars. Out-of-range indexes are ignored.
    fn select_star(&mut self, index: usize);
    /// Paint stars `0..=index` filled without committing a rating.
    fn preview_star(&mut self, index: usize);
    /// Drop the hover preview, restoring the committed rating's display.
    fn end_preview(&mut self);
    fn set_reviewer(&mut self, value: String);
    fn set_comment(&mut self, value: String);
    /// The advisory pre-submit gate: fails iff no rating is committed.
    fn validate_before_submit(&self) -> Result<(), ReviewError>;
    /// Validate the draft and store it as a review.
    ///
    /// On success the modal closes (resetting the draft) and the
    /// reviews-section scroll is requested. On failure the message lands in
    /// the modal's error area and everything else stays as it was.
    fn submit_review(&mut self);
    /// Star painting derived from the committed rating and hover preview.
    fn star_display(&self) -> [StarSnapshot; MAX_STARS];
}

impl ReviewFormOps for AppContext {
    fn open_review_modal(&mut self) {
        self.modal_visible = true;
    }

    fn close_review_modal(&mut self) {
        self.modal_visible = false;
        self.error_message = None;
        self.hover_star = None;
        self.draft.reset();
    }

    fn select_star(&mut self, index: usize) {
        if index < MAX_STARS {
            self.draft.rating = u8::try_from(index + 1).ok();
        }
    }

    fn preview_star(&mut self, index: usize) {
        if index < MAX_STARS {
            self.hover_star = Some(index);
        }
    }

    fn end_preview(&mut self) {
        self.hover_star = None;
    }

    fn set_reviewer(&mut self, value: String) {
        self.draft.reviewer = value;
    }

    fn set_comment(&mut self, value: String) {
        self.draft.comment = value;
    }

    fn validate_before_submit(&self) -> Result<(), ReviewError> {
        match self.draft.rating {
            Some(_) => Ok(()),
            None => Err(ReviewError::MissingRating),
        }
    }

    fn submit_review(&mut self) {
        // Nothing to attach the review to
        let Some(movie_id) = self.current_movie else {
            return;
        };

        if let Err(err) = self.validate_before_submit() {
            self.error_message = Some(err.to_string());
            return;
        }

        match validate_review(&self.draft) {
            Ok(review) => {
                log::info!("Storing {}-star review for movie {movie_id}", review.rating);
                self.reviews.add(movie_id, review);
                self.close_review_modal();
                self.reviews_scroll_epoch += 1;
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
            }
        }
    }

    fn star_display(&self) -> [StarSnapshot; MAX_STARS] {
        let committed = usize::from(self.draft.rating.unwrap_or(0));
        let displayed = self.hover_star.map_or(committed, |hovered| hovered + 1);

        let mut stars = [StarSnapshot::default(); MAX_STARS];
        for (index, star) in stars.iter_mut().enumerate() {
            star.filled = index < displayed;
            star.selected = index < committed;
        }
        stars
    }
}
