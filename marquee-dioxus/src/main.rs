//! Entry point for the mrq binary.

use anyhow::Result;

fn main() -> Result<()> {
    // Load GUI configuration (marquee.toml)
    let config = marquee_dioxus::MarqueeConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load marquee.toml: {err}");
        eprintln!("Using default configuration");
        marquee_dioxus::MarqueeConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    marquee_dioxus::tracing_setup::init(&config.logging);

    log::info!("Starting mrq");

    // Parse command-line arguments and launch the application
    let startup_action = marquee_dioxus::args::parse_args();
    marquee_dioxus::launch(config, startup_action)
}
