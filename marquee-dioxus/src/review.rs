//! Review data model, session store, and validation.
//!
//! Validation mirrors what the review service enforces: the checks run in a
//! fixed order and the first failure wins, so the form surfaces one message
//! at a time.

use std::collections::HashMap;

use thiserror::Error;

/// Minimum number of words a review comment must contain.
pub const MIN_COMMENT_WORDS: usize = 5;

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub reviewer: String,
    /// Stars, 1..=5.
    pub rating: u8,
    pub comment: String,
}

/// In-progress contents of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub reviewer: String,
    /// Committed star rating, `None` until a star is clicked.
    pub rating: Option<u8>,
    pub comment: String,
}

impl ReviewDraft {
    /// Clear every field, returning the draft to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Why a review was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Please select a rating before submitting your review.")]
    MissingRating,
    #[error("User name is required")]
    MissingReviewer,
    #[error("Rating must be between 1 and 5 stars")]
    RatingOutOfRange,
    #[error("Review comment is required")]
    MissingComment,
    #[error("Review must be at least {MIN_COMMENT_WORDS} words")]
    CommentTooShort,
}

/// Validate a complete draft and build the review to store.
///
/// Checks run in the order the review service applies them: reviewer name,
/// rating range, comment presence, comment length.
pub fn validate_review(draft: &ReviewDraft) -> Result<Review, ReviewError> {
    if draft.reviewer.trim().is_empty() {
        return Err(ReviewError::MissingReviewer);
    }

    let rating = draft.rating.ok_or(ReviewError::RatingOutOfRange)?;
    if !(1..=5).contains(&rating) {
        return Err(ReviewError::RatingOutOfRange);
    }

    let comment = draft.comment.trim();
    if comment.is_empty() {
        return Err(ReviewError::MissingComment);
    }
    if comment.split_whitespace().count() < MIN_COMMENT_WORDS {
        return Err(ReviewError::CommentTooShort);
    }

    Ok(Review {
        reviewer: draft.reviewer.trim().to_string(),
        rating,
        comment: comment.to_string(),
    })
}

/// In-memory reviews for the session, keyed by movie id.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    by_movie: HashMap<u64, Vec<Review>>,
}

impl ReviewStore {
    /// Reviews for a movie, oldest first.
    pub fn for_movie(&self, movie_id: u64) -> &[Review] {
        self.by_movie.get(&movie_id).map_or(&[], Vec::as_slice)
    }

    pub fn add(&mut self, movie_id: u64, review: Review) {
        self.by_movie.entry(movie_id).or_default().push(review);
    }

    /// Mean star rating for a movie, `None` without reviews.
    pub fn average_rating(&self, movie_id: u64) -> Option<f64> {
        let reviews = self.for_movie(movie_id);
        if reviews.is_empty() {
            return None;
        }
        let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
        #[allow(
            clippy::cast_precision_loss,
            reason = "session review counts stay far below f64 precision limits"
        )]
        let count = reviews.len() as f64;
        Some(f64::from(total) / count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            reviewer: "Alice".to_string(),
            rating: Some(4),
            comment: "A thoroughly enjoyable film from start to finish".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let review = validate_review(&valid_draft()).expect("should validate");
        assert_eq!(review.reviewer, "Alice");
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn blank_reviewer_is_rejected_first() {
        let draft = ReviewDraft {
            reviewer: "   ".to_string(),
            rating: None,
            comment: String::new(),
        };
        assert_eq!(validate_review(&draft), Err(ReviewError::MissingReviewer));
    }

    #[test]
    fn unset_rating_is_out_of_range() {
        let mut draft = valid_draft();
        draft.rating = None;
        assert_eq!(validate_review(&draft), Err(ReviewError::RatingOutOfRange));
    }

    #[test]
    fn rating_above_five_is_out_of_range() {
        let mut draft = valid_draft();
        draft.rating = Some(6);
        assert_eq!(validate_review(&draft), Err(ReviewError::RatingOutOfRange));
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut draft = valid_draft();
        draft.comment = " \t ".to_string();
        assert_eq!(validate_review(&draft), Err(ReviewError::MissingComment));
    }

    #[test]
    fn four_word_comment_is_too_short() {
        let mut draft = valid_draft();
        draft.comment = "Great movie would recommend".to_string();
        assert_eq!(validate_review(&draft), Err(ReviewError::CommentTooShort));
    }

    #[test]
    fn five_word_comment_passes() {
        let mut draft = valid_draft();
        draft.comment = "Great movie would definitely recommend".to_string();
        assert!(validate_review(&draft).is_ok());
    }

    #[test]
    fn comment_words_split_on_any_whitespace() {
        let mut draft = valid_draft();
        draft.comment = "one\ttwo  three\nfour five".to_string();
        assert!(validate_review(&draft).is_ok());
    }

    #[test]
    fn stored_review_is_trimmed() {
        let mut draft = valid_draft();
        draft.reviewer = "  Bob  ".to_string();
        draft.comment = "  padded comment with enough words  ".to_string();
        let review = validate_review(&draft).expect("should validate");
        assert_eq!(review.reviewer, "Bob");
        assert_eq!(review.comment, "padded comment with enough words");
    }

    #[test]
    fn error_messages_match_the_service() {
        assert_eq!(
            ReviewError::MissingReviewer.to_string(),
            "User name is required"
        );
        assert_eq!(
            ReviewError::RatingOutOfRange.to_string(),
            "Rating must be between 1 and 5 stars"
        );
        assert_eq!(
            ReviewError::MissingComment.to_string(),
            "Review comment is required"
        );
        assert_eq!(
            ReviewError::CommentTooShort.to_string(),
            "Review must be at least 5 words"
        );
    }

    #[test]
    fn store_keeps_reviews_per_movie() {
        let mut store = ReviewStore::default();
        let review = validate_review(&valid_draft()).expect("valid");
        store.add(1, review.clone());
        store.add(2, review);

        assert_eq!(store.for_movie(1).len(), 1);
        assert_eq!(store.for_movie(2).len(), 1);
        assert!(store.for_movie(3).is_empty());
    }

    #[test]
    fn average_rating_is_the_mean() {
        let mut store = ReviewStore::default();
        for rating in [2, 4] {
            let mut draft = valid_draft();
            draft.rating = Some(rating);
            store.add(7, validate_review(&draft).expect("valid"));
        }
        let average = store.average_rating(7).expect("has reviews");
        assert!((average - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_rating_is_none_without_reviews() {
        assert!(ReviewStore::default().average_rating(1).is_none());
    }
}
