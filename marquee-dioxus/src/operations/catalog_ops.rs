//! Catalog operations for the details view.

use crate::catalog::Movie;
use crate::state::AppContext;

/// Extension trait for catalog navigation.
pub trait CatalogOps {
    /// Show a movie in the details view. Unknown ids are ignored.
    fn select_movie(&mut self, id: u64);
    /// The movie currently shown, if any.
    fn current_movie(&self) -> Option<&Movie>;
}

impl CatalogOps for AppContext {
    fn select_movie(&mut self, id: u64) {
        if self.catalog.by_id(id).is_some() {
            self.current_movie = Some(id);
        } else {
            log::warn!("Ignoring selection of unknown movie id {id}");
        }
    }

    fn current_movie(&self) -> Option<&Movie> {
        self.current_movie.and_then(|id| self.catalog.by_id(id))
    }
}
