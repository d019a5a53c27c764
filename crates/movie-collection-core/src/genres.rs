use std::collections::HashMap;

use movie_collection_models::Movie;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
}

/// The most common genres across the whole collection, every status included.
///
/// Ties keep first-encounter order, so the ranking is deterministic for a
/// given collection ordering.
pub fn top_genres(movies: &[Movie], limit: usize) -> Vec<GenreCount> {
    let mut ranked: Vec<GenreCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for movie in movies {
        for label in movie.genre_labels() {
            match slots.get(&label) {
                Some(&slot) => ranked[slot].count += 1,
                None => {
                    slots.insert(label.clone(), ranked.len());
                    ranked.push(GenreCount {
                        name: label,
                        count: 1,
                    });
                }
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
