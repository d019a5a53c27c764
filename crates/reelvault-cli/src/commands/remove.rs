use super::{find_movie, prompts};
use crate::output::Output;
use color_eyre::Result;
use movie_collection_config::PathManager;
use movie_collection_core::{Collection, CollectionStore};

pub async fn run_remove(id: String, yes: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let store = CollectionStore::new(path_manager.collection_file());
    let movies = store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load collection: {}", e))?;
    let mut collection = Collection::from_movies(movies);

    let movie = find_movie(&collection, &id)?.clone();

    if !yes {
        let confirmed = prompts::prompt_yes_no(
            &format!("Remove '{}' from your collection?", movie.title),
            Some(false),
        )?;
        if !confirmed {
            output.info("Nothing removed.");
            return Ok(());
        }
    }

    collection.remove(&movie.id);
    store
        .save(collection.movies())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save collection: {}", e))?;

    output.success(&format!("Removed {} from your collection", movie.title));

    Ok(())
}
