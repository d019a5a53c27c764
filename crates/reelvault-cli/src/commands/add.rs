use super::load_tmdb_token;
use super::spinner::FetchSpinner;
use crate::output::Output;
use color_eyre::Result;
use movie_collection_catalog::{CatalogClient, CatalogMovie, CatalogRequest};
use movie_collection_config::{Config, PathManager};
use movie_collection_core::{Collection, CollectionStore};
use movie_collection_models::{GenreEntry, Movie, MovieStatus};
use uuid::Uuid;

pub async fn run_add(tmdb_id: u64, language: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = Config::load_or_default(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    let store = CollectionStore::new(path_manager.collection_file());
    let movies = store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load collection: {}", e))?;
    let mut collection = Collection::from_movies(movies);

    if collection.find_by_tmdb_id(tmdb_id).is_some() {
        output.warn("This movie is already in your collection.");
        return Ok(());
    }

    let token = load_tmdb_token(&path_manager)?;
    let client = CatalogClient::new(token);
    let request = CatalogRequest {
        tmdb_id: Some(tmdb_id),
        language: Some(language.unwrap_or(config.language)),
        ..Default::default()
    };

    let spinner = FetchSpinner::new("Fetching movie details...");
    let result = client.fetch_details(&request).await;
    spinner.finish_and_clear();
    let details =
        result.map_err(|e| color_eyre::eyre::eyre!("Failed to fetch movie details: {}", e))?;

    let release_year = details.release_year().ok_or_else(|| {
        color_eyre::eyre::eyre!("This movie lacks a valid release date and cannot be added.")
    })?;

    let movie = Movie {
        id: Uuid::new_v4().to_string(),
        title: details.title.clone(),
        release_year: Some(release_year),
        status: MovieStatus::Wishlist,
        rating: None,
        synopsis: details.overview.clone().filter(|overview| !overview.is_empty()),
        personal_review: None,
        genres: genres_from_details(&details),
        tmdb_id: Some(details.id),
        tmdb_poster_path: details.poster_path.clone(),
        user_poster_url: None,
        estimated_price: None,
        watched_at: None,
    };

    collection.upsert(movie);
    store
        .save(collection.movies())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save collection: {}", e))?;

    output.success(&format!("{} added to your collection!", details.title));
    Ok(())
}

fn genres_from_details(details: &CatalogMovie) -> Option<Vec<GenreEntry>> {
    let genres = details.genres.as_deref()?;
    if genres.is_empty() {
        return None;
    }
    Some(
        genres
            .iter()
            .map(|genre| GenreEntry::Record {
                id: Some(genre.id),
                name: Some(genre.name.clone()),
            })
            .collect(),
    )
}
