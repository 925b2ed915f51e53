//! Keyboard input types and translation from Dioxus events.
//!
//! Handlers in [`crate::keybindings`] match on [`KeyEvent`] rather than the
//! raw webview event, so they stay testable without a running webview.

use dioxus::prelude::{Key, KeyboardEvent};

/// A key with printable or special meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A translated key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Translate a Dioxus keyboard event into a crate [`KeyEvent`].
///
/// Returns `None` for keys the app does not dispatch (function keys, bare
/// modifiers, IME composition, ...). Those fall through to the webview's
/// default handling.
///
/// SHIFT is stripped for character keys: the character itself already encodes
/// the shift (`:` vs `;`, `D` vs `d`).
#[must_use]
pub fn translate_key_event(evt: &KeyboardEvent) -> Option<KeyEvent> {
    let code = match evt.key() {
        Key::Escape => KeyCode::Esc,
        Key::Enter => KeyCode::Enter,
        Key::Backspace => KeyCode::Backspace,
        Key::Tab => KeyCode::Tab,
        Key::Character(text) => KeyCode::Char(text.chars().next()?),
        _ => return None,
    };

    let modifiers = KeyModifiers {
        ctrl: evt.modifiers().ctrl(),
        alt: evt.modifiers().alt(),
        shift: evt.modifiers().shift() && !matches!(code, KeyCode::Char(_)),
    };

    Some(KeyEvent { code, modifiers })
}
