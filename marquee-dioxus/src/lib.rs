//! Marquee - a Dioxus desktop app for browsing movies and writing reviews
//!
//! This crate provides a small desktop GUI around a bundled movie catalog.
//! Its centerpiece is the review form: a modal dialog with a 1-5 star
//! selector, opened from the reviews section of the movie details view.
//!
//! ## Quick Start
//!
//! ```no_run
//! use marquee_dioxus::{MarqueeConfig, StartupAction};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = MarqueeConfig::load_default()?;
//!     marquee_dioxus::launch(config, StartupAction::None)
//! }
//! ```
//!
//! ## Architecture
//!
//! All mutable state lives in [`AppContext`] on the main thread and is never
//! shared directly with the UI:
//!
//! 1. `AppContext` lives on the main thread and is never shared
//! 2. We create snapshots of application state for rendering
//! 3. Commands are sent via channels and processed on the main thread
//! 4. The Dioxus app runs in a single-threaded context

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;

// Public library modules
pub mod args;
pub mod catalog;
pub mod components;
pub mod config;
pub mod hooks;
pub mod input;
pub mod keybindings;
pub mod operations;
pub mod review;
pub mod state;
pub mod tracing_setup;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::MarqueeConfig;
pub use state::{AppCommand, AppContext, AppSnapshot, StartupAction};

// Thread-local storage for AppContext to allow synchronous command processing
thread_local! {
    pub(crate) static APP_CTX: RefCell<Option<Rc<RefCell<AppContext>>>> = const { RefCell::new(None) };
}

/// Custom HTML head content with the stylesheet.
const CUSTOM_HEAD: &str = include_str!("../assets/head.html");

/// Launch the Dioxus desktop application.
///
/// Initializes the application context from the startup action, sets up the
/// Dioxus desktop window, and starts the event loop. The tracing subscriber
/// should be installed before calling this (see [`tracing_setup::init`]),
/// otherwise dioxus-logger installs its own.
pub fn launch(config: MarqueeConfig, startup_action: StartupAction) -> Result<()> {
    // Create command channel
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();

    // Initialize application context based on startup action
    let app_ctx = AppContext::new(&startup_action, command_rx);

    // Create initial snapshot
    let initial_snapshot = app_ctx.snapshot();

    // Wrap context in Rc<RefCell> for single-threaded access
    let app_ctx = Rc::new(RefCell::new(app_ctx));

    // Store in thread-local for synchronous command processing from components
    APP_CTX.with(|ctx| {
        *ctx.borrow_mut() = Some(app_ctx.clone());
    });

    // Create app state that can be shared with Dioxus
    let font_css = config.font_css();
    let app_state = AppState {
        command_tx,
        snapshot: Arc::new(parking_lot::Mutex::new(initial_snapshot)),
        font_css,
    };

    // Clone for the closure
    let app_ctx_clone = app_ctx.clone();
    let snapshot_ref = app_state.snapshot.clone();

    // Launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(CUSTOM_HEAD.to_string())
                .with_custom_event_handler(move |_event, _target| {
                    // Process commands on each event loop iteration
                    if let Ok(mut ctx) = app_ctx_clone.try_borrow_mut() {
                        ctx.process_commands();
                        *snapshot_ref.lock() = ctx.snapshot();
                    }
                }),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<AppCommand>,
    pub snapshot: Arc<parking_lot::Mutex<AppSnapshot>>,
    /// CSS custom properties for font configuration (injected after the stylesheet).
    pub font_css: String,
}

impl AppState {
    /// Send a command to the application context.
    pub fn send_command(&self, cmd: AppCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Get the current snapshot.
    pub fn get_snapshot(&self) -> AppSnapshot {
        self.snapshot.lock().clone()
    }

    /// Process pending commands, refresh the published snapshot, and write it
    /// into the signal so subscribed components re-render.
    ///
    /// Call this after sending commands from an event handler.
    pub fn process_and_notify(&self, signal: &mut dioxus::prelude::Signal<AppSnapshot>) {
        APP_CTX.with(|ctx| {
            if let Some(ref app_ctx) = *ctx.borrow() {
                if let Ok(mut app) = app_ctx.try_borrow_mut() {
                    app.process_commands();
                    let new_snapshot = app.snapshot();
                    *self.snapshot.lock() = new_snapshot.clone();
                    signal.set(new_snapshot);
                }
            }
        });
    }
}
