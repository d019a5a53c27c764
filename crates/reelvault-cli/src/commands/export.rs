use crate::output::Output;
use clap::ValueEnum;
use color_eyre::Result;
use movie_collection_config::PathManager;
use movie_collection_core::CollectionStore;
use movie_collection_models::{Movie, PriceValue};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub async fn run_export(
    format: ExportFormat,
    out: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let path_manager = PathManager::default();
    let store = CollectionStore::new(path_manager.collection_file());
    let movies = store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load collection: {}", e))?;

    let content = match format {
        ExportFormat::Csv => export_csv(&movies)?,
        ExportFormat::Json => serde_json::to_string_pretty(&movies)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize collection: {}", e))?,
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &content).map_err(|e| {
                color_eyre::eyre::eyre!("Failed to write {}: {}", path.display(), e)
            })?;
            output.success(&format!(
                "Exported {} movies to {}",
                movies.len(),
                path.display()
            ));
        }
        None => {
            print!("{}", content);
        }
    }

    Ok(())
}

fn export_csv(movies: &[Movie]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "title",
        "release_year",
        "status",
        "rating",
        "personal_review",
        "estimated_price",
        "watched_at",
        "genres",
        "synopsis",
        "tmdb_id",
        "tmdb_poster_path",
        "user_poster_url",
    ])?;

    for movie in movies {
        writer.write_record([
            movie.id.clone(),
            movie.title.clone(),
            movie
                .release_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            movie.status.as_str().to_string(),
            movie
                .rating
                .map(|rating| rating.to_string())
                .unwrap_or_default(),
            movie.personal_review.clone().unwrap_or_default(),
            raw_price(movie.estimated_price.as_ref()),
            movie.watched_at.clone().unwrap_or_default(),
            movie.genre_labels().join(", "),
            movie.synopsis.clone().unwrap_or_default(),
            movie
                .tmdb_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            movie.tmdb_poster_path.clone().unwrap_or_default(),
            movie.user_poster_url.clone().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to finish CSV export: {}", e))?;
    String::from_utf8(bytes)
        .map_err(|e| color_eyre::eyre::eyre!("CSV export produced invalid UTF-8: {}", e))
}

// Prices are exported as stored, without the display-time cleanup
fn raw_price(price: Option<&PriceValue>) -> String {
    match price {
        Some(PriceValue::Number(value)) => value.to_string(),
        Some(PriceValue::Text(text)) => text.clone(),
        None => String::new(),
    }
}
