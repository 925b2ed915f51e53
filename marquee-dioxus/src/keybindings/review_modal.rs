//! Review modal mode keybindings.
//!
//! Handles keyboard input while the review modal is open. Printable keys are
//! left untouched so the form's text fields receive them.

use crate::input::{KeyCode, KeyEvent};
use crate::state::AppCommand;

/// Handle input while the review modal is open.
#[must_use]
pub fn handle_review_modal_mode(key: &KeyEvent) -> Vec<AppCommand> {
    match key.code {
        // Escape dismisses the modal (same as clicking the backdrop)
        KeyCode::Esc => vec![AppCommand::CloseReviewModal],
        _ => vec![],
    }
}
