//! Movie catalog backed by the embedded JSON resource.

use serde::Deserialize;

/// The bundled catalog data.
const MOVIES_JSON: &str = include_str!("../assets/movies.json");

/// A movie from the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub movie_name: String,
    pub director: String,
    pub year: u16,
    pub genre: String,
    pub description: String,
    /// Runtime in minutes.
    pub duration: u32,
    pub imdb_rating: f64,
}

/// The movie collection, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    /// Load the embedded catalog.
    ///
    /// A malformed resource logs an error and yields an empty catalog; the
    /// application still starts and renders an empty state.
    pub fn load() -> Self {
        Self::from_json(MOVIES_JSON)
    }

    /// Parse a catalog from a JSON array of movies.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<Movie>>(json) {
            Ok(movies) => {
                log::info!("Loaded {} movies from catalog", movies.len());
                Self { movies }
            }
            Err(err) => {
                log::error!("Failed to load movie catalog: {err}");
                Self::default()
            }
        }
    }

    /// All movies, in catalog order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Look up a movie by id. Id 0 is never valid.
    pub fn by_id(&self, id: u64) -> Option<&Movie> {
        if id == 0 {
            return None;
        }
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Search by any combination of criteria.
    ///
    /// Name and genre are case-insensitive partial matches, id is exact.
    /// With no criteria every movie matches.
    pub fn search(
        &self,
        name: Option<&str>,
        id: Option<u64>,
        genre: Option<&str>,
    ) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| {
                let name_matches = name.is_none_or(|needle| {
                    movie
                        .movie_name
                        .to_lowercase()
                        .contains(&needle.to_lowercase())
                });
                let id_matches = id.is_none_or(|needle| movie.id == needle);
                let genre_matches = genre.is_none_or(|needle| {
                    movie.genre.to_lowercase().contains(&needle.to_lowercase())
                });
                name_matches && id_matches && genre_matches
            })
            .collect()
    }

    /// Distinct genres, sorted.
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self.movies.iter().map(|movie| movie.genre.clone()).collect();
        genres.sort();
        genres.dedup();
        genres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = MovieCatalog::load();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn malformed_json_yields_empty_catalog() {
        let catalog = MovieCatalog::from_json("{ not json");
        assert!(catalog.is_empty());
    }

    #[test]
    fn by_id_finds_existing_movie() {
        let catalog = MovieCatalog::load();
        let first = catalog.all().first().expect("catalog has movies").clone();
        assert_eq!(catalog.by_id(first.id), Some(&first));
    }

    #[test]
    fn by_id_rejects_zero_and_unknown() {
        let catalog = MovieCatalog::load();
        assert!(catalog.by_id(0).is_none());
        assert!(catalog.by_id(9999).is_none());
    }

    #[test]
    fn search_without_criteria_returns_everything() {
        let catalog = MovieCatalog::load();
        assert_eq!(catalog.search(None, None, None).len(), catalog.all().len());
    }

    #[test]
    fn search_by_name_is_case_insensitive_partial() {
        let catalog = MovieCatalog::load();
        let results = catalog.search(Some("PRISON"), None, None);
        assert_eq!(results.len(), 1);
        assert!(results[0].movie_name.to_lowercase().contains("prison"));
    }

    #[test]
    fn search_by_genre_matches_partially() {
        let catalog = MovieCatalog::load();
        let results = catalog.search(None, None, Some("sci"));
        assert!(!results.is_empty());
        for movie in results {
            assert!(movie.genre.to_lowercase().contains("sci"));
        }
    }

    #[test]
    fn search_by_id_is_exact() {
        let catalog = MovieCatalog::load();
        let results = catalog.search(None, Some(2), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);
    }

    #[test]
    fn combined_criteria_intersect() {
        let catalog = MovieCatalog::load();
        // A name that exists, combined with an id that doesn't match it
        let results = catalog.search(Some("prison"), Some(9999), None);
        assert!(results.is_empty());
    }

    #[test]
    fn genres_are_sorted_and_distinct() {
        let catalog = MovieCatalog::load();
        let genres = catalog.genres();
        assert!(!genres.is_empty());
        let mut sorted = genres.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(genres, sorted);
    }
}
