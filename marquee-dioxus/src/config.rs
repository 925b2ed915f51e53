//! GUI configuration for marquee-dioxus.
//!
//! Configuration is loaded from `~/.config/marquee/marquee.toml` and provides
//! window, font, and logging settings. Every section falls back to sensible
//! defaults, so the file is optional.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::BaseStrategy;
use serde::Deserialize;

/// Application configuration loaded from `marquee.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Font configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            font: FontConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Marquee".to_string(),
            width: 1000.0,
            height: 760.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "'Inter', 'Segoe UI', 'Helvetica Neue', Arial, sans-serif".to_string(),
            size: 15.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from("/tmp/marquee-dioxus.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
                "pointerenter".to_string(),
                "pointerleave".to_string(),
            ],
        }
    }
}

impl MarqueeConfig {
    /// Load configuration from the default location (`~/.config/marquee/marquee.toml`).
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let Some(config_path) = default_config_path() else {
            return Ok(Self::default());
        };
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<MarqueeConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the font family.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font.family = family.into();
        self
    }

    /// Set the font size in pixels.
    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Generate CSS custom properties for the font configuration.
    ///
    /// The result is injected via `document::Style` after the stylesheet, so
    /// it overrides the `:root` defaults from `assets/head.html`.
    #[must_use]
    pub fn font_css(&self) -> String {
        format!(
            ":root {{ --font-ui: {}; --font-size: {}px; }}",
            self.font.family, self.font.size
        )
    }
}

/// Resolve the config file path from the platform config directory.
fn default_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("marquee").join("marquee.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = MarqueeConfig::default();
        assert_eq!(config.window.title, "Marquee");
        assert!((config.window.width - 1000.0).abs() < f64::EPSILON);
        assert!((config.window.height - 760.0).abs() < f64::EPSILON);
        assert!((config.font.size - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = MarqueeConfig::default()
            .with_window_title("My Cinema")
            .with_window_size(800.0, 600.0)
            .with_font_family("'Futura'")
            .with_font_size(17.0)
            .with_log_file("/tmp/cinema.log")
            .with_log_level("debug");

        assert_eq!(config.window.title, "My Cinema");
        assert!((config.window.width - 800.0).abs() < f64::EPSILON);
        assert!((config.window.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.font.family, "'Futura'");
        assert!((config.font.size - 17.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.log_file, Some(PathBuf::from("/tmp/cinema.log")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn font_css_carries_family_and_size() {
        let config = MarqueeConfig::default();
        let css = config.font_css();
        assert!(css.contains("--font-ui:"));
        assert!(css.contains("--font-size: 15px"));
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[window]
title = "custom"

[font]
size = 18.0
"#;
        let config = toml::from_str::<MarqueeConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.window.title, "custom");
        // Width should be default
        assert!((config.window.width - 1000.0).abs() < f64::EPSILON);
        assert!((config.font.size - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_nonexistent_path_returns_error() {
        let result = MarqueeConfig::load_from(Path::new("/nonexistent/marquee.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "[window]\ntitle = \"from disk\"\n\n[logging]\nlevel = \"trace\"\n"
        )
        .expect("write config");

        let config = MarqueeConfig::load_from(file.path()).expect("should load");
        assert_eq!(config.window.title, "from disk");
        assert_eq!(config.logging.level, "trace");
        // Untouched sections keep their defaults
        assert!((config.font.size - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_malformed_file_returns_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[window\ntitle = ").expect("write config");

        assert!(MarqueeConfig::load_from(file.path()).is_err());
    }
}
