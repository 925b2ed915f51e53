//! Keybinding handlers for overlay modes.
//!
//! The details view itself has no keyboard modes; this module contains
//! handlers for overlay UIs. Handlers take a translated [`crate::input::KeyEvent`]
//! and return the commands to dispatch, so they are plain functions that can
//! be unit tested.

mod review_modal;

pub use review_modal::handle_review_modal_mode;
