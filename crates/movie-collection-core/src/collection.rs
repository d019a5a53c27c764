use movie_collection_models::Movie;

/// In-memory snapshot of one user's collection.
///
/// Mutations replace whole rows by identifier and bump a generation counter.
/// Callers that refresh asynchronously can compare generations to drop
/// results computed against a snapshot that has since changed.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    movies: Vec<Movie>,
    generation: u64,
}

impl Collection {
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Collection {
            movies,
            generation: 0,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn find_by_tmdb_id(&self, tmdb_id: u64) -> Option<&Movie> {
        self.movies
            .iter()
            .find(|movie| movie.tmdb_id == Some(tmdb_id))
    }

    /// Replace the row with the same id in place, or append a new one
    pub fn upsert(&mut self, movie: Movie) {
        match self.movies.iter_mut().find(|existing| existing.id == movie.id) {
            Some(existing) => *existing = movie,
            None => self.movies.push(movie),
        }
        self.generation += 1;
    }

    /// Remove by id; returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|movie| movie.id != id);
        let removed = self.movies.len() != before;
        if removed {
            self.generation += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_collection_models::MovieStatus;

    fn create_movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            release_year: Some(2020),
            status: MovieStatus::Wishlist,
            rating: None,
            synopsis: None,
            personal_review: None,
            genres: None,
            tmdb_id: None,
            tmdb_poster_path: None,
            user_poster_url: None,
            estimated_price: None,
            watched_at: None,
        }
    }

    #[test]
    fn test_upsert_appends_new_rows() {
        let mut collection = Collection::default();
        collection.upsert(create_movie("1", "Dune"));
        collection.upsert(create_movie("2", "Clue"));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.generation(), 2);
        assert_eq!(collection.find("2").unwrap().title, "Clue");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut collection = Collection::from_movies(vec![
            create_movie("1", "Dune"),
            create_movie("2", "Clue"),
        ]);

        let mut edited = create_movie("1", "Dune");
        edited.status = MovieStatus::Watched;
        collection.upsert(edited);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.movies()[0].id, "1");
        assert_eq!(collection.movies()[0].status, MovieStatus::Watched);
        assert_eq!(collection.generation(), 1);
    }

    #[test]
    fn test_remove_only_bumps_generation_on_change() {
        let mut collection = Collection::from_movies(vec![create_movie("1", "Dune")]);

        assert!(!collection.remove("missing"));
        assert_eq!(collection.generation(), 0);

        assert!(collection.remove("1"));
        assert!(collection.is_empty());
        assert_eq!(collection.generation(), 1);
    }

    #[test]
    fn test_find_by_tmdb_id() {
        let mut movie = create_movie("1", "Dune");
        movie.tmdb_id = Some(438631);
        let collection = Collection::from_movies(vec![movie]);

        assert!(collection.find_by_tmdb_id(438631).is_some());
        assert!(collection.find_by_tmdb_id(999).is_none());
    }
}
