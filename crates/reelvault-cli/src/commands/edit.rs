use super::find_movie;
use crate::output::Output;
use chrono::Utc;
use color_eyre::Result;
use movie_collection_config::PathManager;
use movie_collection_core::{apply_edit, Collection, CollectionStore, MovieEdit};
use movie_collection_models::{FieldPolicy, MovieStatus, PriceValue};

pub async fn run_edit(
    id: String,
    status: Option<MovieStatus>,
    rating: Option<u8>,
    clear_rating: bool,
    review: Option<String>,
    price: Option<f64>,
    clear_price: bool,
    poster: Option<String>,
    clear_poster: bool,
    output: &Output,
) -> Result<()> {
    let no_changes = status.is_none()
        && rating.is_none()
        && !clear_rating
        && review.is_none()
        && price.is_none()
        && !clear_price
        && poster.is_none()
        && !clear_poster;
    if no_changes {
        output.warn("No changes specified. Use --status, --rating, --review, --price, or --poster");
        output.println("\nExample: reelvault edit <id> --status watched --rating 4");
        return Ok(());
    }

    if let Some(p) = price {
        if !p.is_finite() || p < 0.0 {
            return Err(color_eyre::eyre::eyre!("Price must be a non-negative number"));
        }
    }

    let path_manager = PathManager::default();
    let store = CollectionStore::new(path_manager.collection_file());
    let movies = store
        .load()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load collection: {}", e))?;
    let mut collection = Collection::from_movies(movies);

    let movie = find_movie(&collection, &id)?.clone();

    // Warn up front about fields the new status will drop
    let final_status = status.unwrap_or(movie.status);
    let policy = FieldPolicy::for_status(final_status);
    if !policy.rating && (rating.is_some() || movie.rating.is_some()) {
        output.warn("Ratings only apply to watched movies, so the rating was cleared.");
    }
    if !policy.review && (review.is_some() || movie.personal_review.is_some()) {
        output.warn("Reviews only apply to watched movies, so the review was cleared.");
    }
    if !policy.price && (price.is_some() || movie.estimated_price.is_some()) {
        output.warn("A price only applies to owned or watched movies, so the price was cleared.");
    }

    let edit = MovieEdit {
        status,
        rating,
        clear_rating,
        review,
        price: price.map(PriceValue::Number),
        clear_price,
        poster_url: poster,
        clear_poster,
    };
    let updated = apply_edit(&movie, &edit, Utc::now());
    let title = updated.title.clone();

    collection.upsert(updated);
    store
        .save(collection.movies())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save collection: {}", e))?;

    output.success(&format!("Updated {}", title));

    Ok(())
}
