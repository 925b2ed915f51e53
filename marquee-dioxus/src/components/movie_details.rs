//! Movie details pane.

use dioxus::prelude::*;

use crate::catalog::Movie;

/// Details card for the current movie.
#[component]
pub fn MovieDetails(movie: Movie) -> Element {
    rsx! {
        section {
            class: "movie-details",

            h1 {
                class: "movie-title",
                "{movie.movie_name}"
            }

            div {
                class: "movie-meta",
                span { "{movie.year}" }
                span { class: "movie-meta-sep", "·" }
                span { "{movie.genre}" }
                span { class: "movie-meta-sep", "·" }
                span { "{movie.duration} min" }
                span { class: "movie-meta-sep", "·" }
                span { class: "movie-imdb", "IMDb {movie.imdb_rating:.1}" }
            }

            div {
                class: "movie-director",
                "Directed by {movie.director}"
            }

            p {
                class: "movie-description",
                "{movie.description}"
            }
        }
    }
}
