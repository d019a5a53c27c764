use chrono::{DateTime, SecondsFormat, Utc};
use movie_collection_models::{FieldPolicy, Movie, MovieStatus, PriceValue};
use tracing::debug;

/// A partial edit to a movie row. Absent fields keep their current value;
/// the clear flags and the explicit zero rating remove one.
#[derive(Debug, Clone, Default)]
pub struct MovieEdit {
    pub status: Option<MovieStatus>,
    /// 0 clears the rating
    pub rating: Option<u8>,
    pub clear_rating: bool,
    /// Trimmed; an empty string clears the review
    pub review: Option<String>,
    pub price: Option<PriceValue>,
    pub clear_price: bool,
    /// Trimmed; an empty string clears the override
    pub poster_url: Option<String>,
    pub clear_poster: bool,
}

/// Produce the replacement row for an edit.
///
/// Status drives the watch date: moving into watched stamps `now`, staying
/// watched keeps the existing date (stamping only when it is missing), and
/// any other status clears it. After the explicit field edits, fields the
/// final status does not permit are cleared so a row never leaves here
/// violating the status policy.
pub fn apply_edit(movie: &Movie, edit: &MovieEdit, now: DateTime<Utc>) -> Movie {
    let mut updated = movie.clone();

    if let Some(next) = edit.status {
        if next == MovieStatus::Watched && updated.status != MovieStatus::Watched {
            updated.watched_at = Some(stamp(now));
        }
        updated.status = next;
    }
    match updated.status {
        MovieStatus::Watched => {
            if updated.watched_at.is_none() {
                updated.watched_at = Some(stamp(now));
            }
        }
        _ => updated.watched_at = None,
    }

    if edit.clear_rating {
        updated.rating = None;
    } else if let Some(rating) = edit.rating {
        updated.rating = if rating == 0 { None } else { Some(rating) };
    }

    if let Some(review) = &edit.review {
        let trimmed = review.trim();
        updated.personal_review = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    if edit.clear_poster {
        updated.user_poster_url = None;
    } else if let Some(url) = &edit.poster_url {
        let trimmed = url.trim();
        updated.user_poster_url = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    if edit.clear_price {
        updated.estimated_price = None;
    } else if let Some(price) = &edit.price {
        updated.estimated_price = Some(price.clone());
    }

    let policy = FieldPolicy::for_status(updated.status);
    if !policy.rating {
        updated.rating = None;
    }
    if !policy.review {
        updated.personal_review = None;
    }
    if !policy.price {
        updated.estimated_price = None;
    }

    debug!(
        movie_id = %movie.id,
        status = %updated.status,
        "Applied edit to movie"
    );
    updated
}

fn stamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}
