use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::status::MovieStatus;

/// Base URL for posters served from the TMDB image CDN
pub const TMDB_POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A movie in a user's collection.
///
/// Rows are user-edited and may carry legacy-shaped values (prices stored as
/// strings, malformed watch timestamps, genre entries in two shapes). The
/// accessors on this type normalize those instead of failing, so one bad row
/// never makes a collection unreadable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    pub status: MovieStatus,
    /// 1-5 stars, only meaningful while the status permits it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<GenreEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<PriceValue>,
    /// Kept as raw text so malformed legacy timestamps still deserialize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<String>,
}

/// Genre entries arrive either as bare labels or as catalog records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GenreEntry {
    Name(String),
    Record {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl GenreEntry {
    pub fn label(&self) -> Option<&str> {
        match self {
            GenreEntry::Name(name) => Some(name.as_str()),
            GenreEntry::Record { name, .. } => name.as_deref(),
        }
    }
}

/// Prices arrive as numbers or as numeric strings from older rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl Movie {
    /// Genre labels in source order, dropping entries with no resolvable name
    pub fn genre_labels(&self) -> Vec<String> {
        self.genres
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(GenreEntry::label)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Display poster: the user-supplied override wins over the catalog path
    pub fn poster_url(&self) -> Option<String> {
        if let Some(url) = &self.user_poster_url {
            return Some(url.clone());
        }
        self.tmdb_poster_path
            .as_ref()
            .map(|path| format!("{}{}", TMDB_POSTER_BASE_URL, path))
    }

    /// Lenient parse of `watched_at`: RFC 3339, then a naive datetime, then a
    /// bare date. Anything else is treated as "never watched".
    pub fn watched_date(&self) -> Option<DateTime<Utc>> {
        parse_watched_at(self.watched_at.as_deref()?)
    }

    /// Watch date formatted like "Mar 5, 2024", None when unparseable
    pub fn watched_date_label(&self) -> Option<String> {
        self.watched_date()
            .map(|date| date.format("%b %-d, %Y").to_string())
    }
}

fn parse_watched_at(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    None
}

/// Coerce a stored price to a finite non-negative amount. Unparseable,
/// non-finite, and negative values all count as 0; this never fails.
pub fn coerce_price(value: Option<&PriceValue>) -> f64 {
    let amount = match value {
        Some(PriceValue::Number(number)) => *number,
        Some(PriceValue::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// US-style currency label with whole-dollar rounding; a dash for anything
/// that is not a positive finite amount
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "—".to_string();
    }
    format!("${}", group_thousands(value.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Five-slot star strip, e.g. "★★★☆☆" for a rating of 3
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut stars = String::new();
    for slot in 0..5 {
        stars.push(if slot < filled { '★' } else { '☆' });
    }
    stars
}
