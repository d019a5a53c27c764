use chrono::{DateTime, Datelike, Utc};
use movie_collection_models::{coerce_price, Movie, MovieStatus};
use serde::Serialize;

/// Per-status movie counts. Every status is always present so renderers can
/// show a zero instead of skipping a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub wishlist: usize,
    pub owned: usize,
    pub watched: usize,
}

impl StatusCounts {
    pub fn for_status(&self, status: MovieStatus) -> usize {
        match status {
            MovieStatus::Wishlist => self.wishlist,
            MovieStatus::Owned => self.owned,
            MovieStatus::Watched => self.watched,
        }
    }
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionSummary {
    pub total: usize,
    pub status_counts: StatusCounts,
    pub watched_this_year: usize,
    pub total_value: f64,
}

/// Aggregate a collection into its dashboard summary.
///
/// `watched_this_year` counts rows whose watch date falls in the calendar
/// year of `now`, whatever their current status. `total_value` coerces each
/// stored price, so junk rows contribute zero instead of poisoning the sum.
pub fn summarize(movies: &[Movie], now: DateTime<Utc>) -> CollectionSummary {
    let mut counts = StatusCounts::default();
    let mut watched_this_year = 0;
    let mut total_value = 0.0;

    for movie in movies {
        match movie.status {
            MovieStatus::Wishlist => counts.wishlist += 1,
            MovieStatus::Owned => counts.owned += 1,
            MovieStatus::Watched => counts.watched += 1,
        }
        if let Some(date) = movie.watched_date() {
            if date.year() == now.year() {
                watched_this_year += 1;
            }
        }
        total_value += coerce_price(movie.estimated_price.as_ref());
    }

    CollectionSummary {
        total: movies.len(),
        status_counts: counts,
        watched_this_year,
        total_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use movie_collection_models::PriceValue;

    fn create_movie(id: &str, status: MovieStatus) -> Movie {
        Movie {
            id: id.to_string(),
            title: format!("Movie {}", id),
            release_year: Some(2020),
            status,
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

    fn june_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_summarize_empty_collection_keeps_all_statuses() {
        let summary = summarize(&[], june_2024());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.status_counts.wishlist, 0);
        assert_eq!(summary.status_counts.owned, 0);
        assert_eq!(summary.status_counts.watched, 0);
        assert_eq!(summary.watched_this_year, 0);
        assert_eq!(summary.total_value, 0.0);
    }

    #[test]
    fn test_summarize_counts_by_status() {
        let movies = vec![
            create_movie("1", MovieStatus::Wishlist),
            create_movie("2", MovieStatus::Wishlist),
            create_movie("3", MovieStatus::Owned),
            create_movie("4", MovieStatus::Watched),
        ];

        let summary = summarize(&movies, june_2024());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.status_counts.wishlist, 2);
        assert_eq!(summary.status_counts.owned, 1);
        assert_eq!(summary.status_counts.watched, 1);
        assert_eq!(
            summary.status_counts.wishlist + summary.status_counts.owned + summary.status_counts.watched,
            summary.total
        );
    }

    #[test]
    fn test_watched_this_year_uses_watch_date_not_status() {
        let mut this_year = create_movie("1", MovieStatus::Owned);
        this_year.watched_at = Some("2024-02-01T10:00:00Z".to_string());
        let mut last_year = create_movie("2", MovieStatus::Watched);
        last_year.watched_at = Some("2023-11-20T10:00:00Z".to_string());
        let mut unparseable = create_movie("3", MovieStatus::Watched);
        unparseable.watched_at = Some("whenever".to_string());
        let unwatched = create_movie("4", MovieStatus::Watched);

        let summary = summarize(&[this_year, last_year, unparseable, unwatched], june_2024());
        assert_eq!(summary.watched_this_year, 1);
    }

    #[test]
    fn test_total_value_coerces_stored_prices() {
        let mut numeric = create_movie("1", MovieStatus::Owned);
        numeric.estimated_price = Some(PriceValue::Number(20.0));
        let mut text = create_movie("2", MovieStatus::Owned);
        text.estimated_price = Some(PriceValue::Text("9.99".to_string()));
        let mut junk = create_movie("3", MovieStatus::Owned);
        junk.estimated_price = Some(PriceValue::Text("coupon".to_string()));
        let mut negative = create_movie("4", MovieStatus::Owned);
        negative.estimated_price = Some(PriceValue::Number(-5.0));
        let unpriced = create_movie("5", MovieStatus::Wishlist);

        let summary = summarize(&[numeric, text, junk, negative, unpriced], june_2024());
        assert!((summary.total_value - 29.99).abs() < 1e-9);
    }
}
