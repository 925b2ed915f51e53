//! Test helpers for application state tests.
//!
//! Provides utilities to create an `AppContext` over the embedded catalog and
//! build key events for keybinding tests.

use std::sync::mpsc;

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::state::{AppCommand, AppContext, StartupAction};

/// Create an `AppContext` over the embedded catalog, showing the first movie.
pub fn test_context() -> AppContext {
    let (_tx, rx) = mpsc::channel();
    AppContext::new(&StartupAction::None, rx)
}

/// Create an `AppContext` together with the sender feeding its command channel.
pub fn test_context_with_channel() -> (AppContext, mpsc::Sender<AppCommand>) {
    let (tx, rx) = mpsc::channel();
    (AppContext::new(&StartupAction::None, rx), tx)
}

/// Create an `AppContext` showing the given movie.
pub fn test_context_with_movie(id: u64) -> AppContext {
    let (_tx, rx) = mpsc::channel();
    AppContext::new(&StartupAction::OpenMovie(id), rx)
}

/// Fill the draft with contents that pass full validation, rating included.
pub fn fill_valid_draft(ctx: &mut AppContext) {
    ctx.handle_command(AppCommand::SetReviewer("Alice".to_string()));
    ctx.handle_command(AppCommand::SetComment(
        "A thoroughly enjoyable film from start to finish".to_string(),
    ));
    ctx.handle_command(AppCommand::SelectStar(3));
}

/// Create a `KeyEvent` with no modifiers for the given character.
pub fn key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::default(),
    }
}

/// Create a `KeyEvent` for a special (non-character) key.
pub fn special_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::default(),
    }
}

/// Assert that a command list contains exactly one command matching the pattern.
///
/// Usage: `assert_single_command!(cmds, AppCommand::CloseReviewModal);`
#[macro_export]
macro_rules! assert_single_command {
    ($cmds:expr, $pattern:pat) => {{
        assert_eq!(
            $cmds.len(),
            1,
            "expected 1 command, got {}: {:?}",
            $cmds.len(),
            $cmds
        );
        assert!(
            matches!($cmds[0], $pattern),
            "expected {}, got {:?}",
            stringify!($pattern),
            $cmds[0]
        );
    }};
}
