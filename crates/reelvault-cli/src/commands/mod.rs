pub mod add;
pub mod config;
pub mod dashboard;
pub mod discover;
pub mod edit;
pub mod export;
pub mod list;
pub mod prompts;
pub mod remove;
pub mod spinner;

use color_eyre::Result;
use movie_collection_config::{CredentialStore, PathManager};
use movie_collection_core::Collection;
use movie_collection_models::Movie;

/// Resolve the TMDB token; the environment variable wins over the stored credential
pub fn load_tmdb_token(path_manager: &PathManager) -> Result<String> {
    if let Ok(token) = std::env::var("TMDB_ACCESS_TOKEN") {
        let token = token.trim().to_string();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let mut cred_store = CredentialStore::new(path_manager.credentials_file());
    cred_store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load credentials: {}", e))?;
    cred_store
        .get_tmdb_token()
        .filter(|token| !token.is_empty())
        .cloned()
        .ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "No TMDB token configured. Run 'reelvault config token' or set TMDB_ACCESS_TOKEN"
            )
        })
}

/// Find a movie by full id or unique id prefix
pub fn find_movie<'a>(collection: &'a Collection, id: &str) -> Result<&'a Movie> {
    if let Some(movie) = collection.find(id) {
        return Ok(movie);
    }

    let matches: Vec<&Movie> = collection
        .movies()
        .iter()
        .filter(|movie| movie.id.starts_with(id))
        .collect();
    match matches.as_slice() {
        [movie] => Ok(movie),
        [] => Err(color_eyre::eyre::eyre!(
            "No movie with id '{}' in your collection",
            id
        )),
        _ => Err(color_eyre::eyre::eyre!(
            "Movie id '{}' is ambiguous ({} matches); use more characters",
            id,
            matches.len()
        )),
    }
}
