use anyhow::{anyhow, Result};
use movie_collection_models::Movie;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON-file persistence for one collection.
///
/// A missing file is an empty collection. A file that exists but fails to
/// parse is an error, never silently discarded, because this file is the
/// user's only copy of their data.
#[derive(Clone)]
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Movie>> {
        if !self.path.exists() {
            debug!("Collection file does not exist yet: {:?}", self.path);
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| anyhow!("Failed to read collection file {:?}: {}", self.path, e))?;
        let movies: Vec<Movie> = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Collection file {:?} is not valid JSON: {}", self.path, e))?;

        info!("Loaded {} movies from {:?}", movies.len(), self.path);
        Ok(movies)
    }

    pub fn save(&self, movies: &[Movie]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow!("Failed to create data directory {:?}: {}", parent, e))?;
        }

        let json = serde_json::to_string_pretty(movies)
            .map_err(|e| anyhow!("Failed to serialize collection: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| anyhow!("Failed to write collection file {:?}: {}", self.path, e))?;

        debug!("Saved {} movies to {:?}", movies.len(), self.path);
        Ok(())
    }
}
