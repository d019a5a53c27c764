use movie_collection_models::{Movie, MovieStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusSlice {
    pub status: MovieStatus,
    pub label: String,
    pub count: usize,
}

/// How the collection splits across statuses, in fixed wishlist, owned,
/// watched order. Statuses with no movies are omitted entirely.
pub fn status_distribution(movies: &[Movie]) -> Vec<StatusSlice> {
    [MovieStatus::Wishlist, MovieStatus::Owned, MovieStatus::Watched]
        .into_iter()
        .map(|status| StatusSlice {
            status,
            label: status.label().to_string(),
            count: movies.iter().filter(|movie| movie.status == status).count(),
        })
        .filter(|slice| slice.count > 0)
        .collect()
}
