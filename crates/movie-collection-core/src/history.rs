use chrono::{DateTime, Datelike, Utc};
use movie_collection_models::{Movie, MovieStatus};
use serde::Serialize;

const MONTH_NAMES: [(&str, &str); 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

/// One calendar month in the viewing history
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthBucket {
    pub month: String,
    pub short: String,
    pub year: i32,
    pub count: usize,
}

impl MonthBucket {
    /// e.g. "Mar 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.short, self.year)
    }
}

/// Calendar-month arithmetic that survives year boundaries
fn month_back(now: DateTime<Utc>, back: i64) -> (i32, u32) {
    let total = i64::from(now.year()) * 12 + i64::from(now.month0()) - back;
    let year = total.div_euclid(12) as i32;
    let month0 = total.rem_euclid(12) as u32;
    (year, month0 + 1)
}

/// Movies watched per month over the trailing twelve months, oldest first,
/// ending with the month of `now`. Only rows currently marked watched count,
/// and only when their watch date parses.
pub fn watched_history(movies: &[Movie], now: DateTime<Utc>) -> Vec<MonthBucket> {
    (0..12)
        .map(|index| {
            let (year, month) = month_back(now, 11 - index);
            let count = movies
                .iter()
                .filter(|movie| movie.status == MovieStatus::Watched)
                .filter_map(Movie::watched_date)
                .filter(|date| date.year() == year && date.month() == month)
                .count();
            let (name, short) = MONTH_NAMES[(month - 1) as usize];
            MonthBucket {
                month: name.to_string(),
                short: short.to_string(),
                year,
                count,
            }
        })
        .collect()
}
