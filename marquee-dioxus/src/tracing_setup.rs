//! Tracing configuration for marquee-dioxus.
//!
//! This module sets up the tracing subscriber with custom filtering to suppress
//! noisy webview events like `SelectionDidChange` that pollute the log output.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Custom event formatter that drops messages containing suppressed patterns.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed_patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default(),
            suppressed_patterns,
        }
    }

    fn is_suppressed(&self, message: &str) -> bool {
        self.suppressed_patterns
            .iter()
            .any(|pattern| message.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        // Capture the formatted message to check for suppressed patterns
        let mut message_buf = String::new();
        let capture_writer = Writer::new(&mut message_buf);
        self.inner.format_event(ctx, capture_writer, event)?;

        if self.is_suppressed(&message_buf) {
            Ok(())
        } else {
            write!(writer, "{message_buf}")
        }
    }
}

/// Initialize the tracing subscriber from [`LoggingConfig`].
///
/// This sets up:
/// - Environment-based filtering via `RUST_LOG` (defaults to the configured level)
/// - Custom message filtering to suppress noisy webview events
/// - Output to the configured log file (falls back to stderr)
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let log_file = config.log_file.as_ref().and_then(|path| {
        File::create(path)
            .map_err(|err| {
                eprintln!("Warning: cannot create log file {}: {err}", path.display());
            })
            .ok()
    });

    if let Some(file) = log_file {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .event_format(FilteringFormatter::new(config.suppressed_patterns.clone()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .event_format(FilteringFormatter::new(config.suppressed_patterns.clone()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_suppress_webview_noise() {
        let formatter = FilteringFormatter::new(LoggingConfig::default().suppressed_patterns);
        assert!(formatter.is_suppressed("INFO Dispatched unknown event: mousemove"));
        assert!(formatter.is_suppressed("ERROR SelectionDidChange failure"));
    }

    #[test]
    fn unrelated_messages_pass_through() {
        let formatter = FilteringFormatter::new(LoggingConfig::default().suppressed_patterns);
        assert!(!formatter.is_suppressed("INFO Loaded 6 movies"));
    }

    #[test]
    fn empty_pattern_list_suppresses_nothing() {
        let formatter = FilteringFormatter::new(Vec::new());
        assert!(!formatter.is_suppressed("INFO Dispatched unknown event"));
    }
}
