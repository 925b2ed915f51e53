//! Command-line argument parsing.

use crate::state::StartupAction;

/// Parse command-line arguments and determine the startup action.
///
/// `mrq [movie-id]` opens the catalog at the given movie. Anything else is
/// ignored with a warning and the app starts on the first catalog entry.
pub fn parse_args() -> StartupAction {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first() {
        None => StartupAction::None,
        Some(arg) => parse_movie_id(arg),
    }
}

/// Parse a single movie-id argument.
fn parse_movie_id(arg: &str) -> StartupAction {
    match arg.parse::<u64>() {
        Ok(id) if id > 0 => StartupAction::OpenMovie(id),
        _ => {
            log::warn!("Ignoring invalid movie id argument: {arg}");
            StartupAction::None
        }
    }
}
