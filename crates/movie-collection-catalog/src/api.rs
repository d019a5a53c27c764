use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub const TMDB_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// The catalog operations the client exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    Search,
    Popular,
    TopRated,
    Upcoming,
    Trending,
    Details,
}

impl CatalogEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogEndpoint::Search => "search",
            CatalogEndpoint::Popular => "popular",
            CatalogEndpoint::TopRated => "top_rated",
            CatalogEndpoint::Upcoming => "upcoming",
            CatalogEndpoint::Trending => "trending",
            CatalogEndpoint::Details => "details",
        }
    }
}

impl fmt::Display for CatalogEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CatalogEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" => Ok(CatalogEndpoint::Search),
            "popular" => Ok(CatalogEndpoint::Popular),
            "top-rated" | "top_rated" => Ok(CatalogEndpoint::TopRated),
            "upcoming" => Ok(CatalogEndpoint::Upcoming),
            "trending" => Ok(CatalogEndpoint::Trending),
            "details" => Ok(CatalogEndpoint::Details),
            _ => Err(format!(
                "Invalid catalog endpoint: {}. Use 'search', 'popular', 'top-rated', 'upcoming', 'trending', or 'details'",
                s
            )),
        }
    }
}

/// Parameters for one catalog call. Unused fields are ignored by endpoints
/// that do not take them.
#[derive(Debug, Clone, Default)]
pub struct CatalogRequest {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub tmdb_id: Option<u64>,
    pub language: Option<String>,
    pub include_genres: bool,
}

/// Build the upstream URL for an endpoint, validating the parameters it
/// requires. Search needs a non-blank query and details needs a TMDB id.
pub fn build_url(endpoint: CatalogEndpoint, request: &CatalogRequest) -> Result<String, CatalogError> {
    let language = request.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let page = normalized_page(request.page);

    match endpoint {
        CatalogEndpoint::Search => {
            let query = request.query.as_deref().map(str::trim).unwrap_or("");
            if query.is_empty() {
                return Err(CatalogError::BadRequest(
                    "Search requires a non-empty query".to_string(),
                ));
            }
            Ok(format!(
                "{}/search/movie?query={}&include_adult=false&language={}&page={}",
                TMDB_API_BASE_URL,
                urlencoding::encode(query),
                language,
                page
            ))
        }
        CatalogEndpoint::Popular => Ok(format!(
            "{}/movie/popular?language={}&page={}",
            TMDB_API_BASE_URL, language, page
        )),
        CatalogEndpoint::TopRated => Ok(format!(
            "{}/movie/top_rated?language={}&page={}",
            TMDB_API_BASE_URL, language, page
        )),
        CatalogEndpoint::Upcoming => Ok(format!(
            "{}/movie/upcoming?language={}&page={}",
            TMDB_API_BASE_URL, language, page
        )),
        CatalogEndpoint::Trending => Ok(format!(
            "{}/trending/movie/week?language={}",
            TMDB_API_BASE_URL, language
        )),
        CatalogEndpoint::Details => {
            let tmdb_id = request.tmdb_id.ok_or_else(|| {
                CatalogError::BadRequest("Details requires a TMDB id".to_string())
            })?;
            Ok(format!(
                "{}/movie/{}?language={}",
                TMDB_API_BASE_URL, tmdb_id, language
            ))
        }
    }
}

pub fn genre_list_url(language: &str) -> String {
    format!("{}/genre/movie/list?language={}", TMDB_API_BASE_URL, language)
}

fn normalized_page(page: Option<u32>) -> u32 {
    page.filter(|page| *page >= 1).unwrap_or(1)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreRef {
    pub id: u64,
    pub name: String,
}

/// One movie as the catalog returns it. List endpoints carry `genre_ids`
/// while the details endpoint carries full `genres`; unrecognized fields are
/// kept so JSON output remains a faithful pass-through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMovie {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub genre_ids: Option<Vec<u64>>,
    pub genres: Option<Vec<GenreRef>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogMovie {
    /// Year component of `release_date`, None when absent or malformed
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref()?.trim().get(..4)?.parse().ok()
    }

    pub fn genre_names(&self) -> Vec<String> {
        self.genres
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|genre| genre.name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<CatalogMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<GenreRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let request = CatalogRequest {
            query: Some("dune part two".to_string()),
            page: Some(2),
            ..Default::default()
        };
        let url = build_url(CatalogEndpoint::Search, &request).unwrap();
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?query=dune%20part%20two&include_adult=false&language=en-US&page=2"
        );
    }

    #[test]
    fn test_search_requires_query() {
        let blank = CatalogRequest {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_url(CatalogEndpoint::Search, &blank),
            Err(CatalogError::BadRequest(_))
        ));
        assert!(matches!(
            build_url(CatalogEndpoint::Search, &CatalogRequest::default()),
            Err(CatalogError::BadRequest(_))
        ));
    }

    #[test]
    fn test_list_urls() {
        let request = CatalogRequest::default();
        assert_eq!(
            build_url(CatalogEndpoint::Popular, &request).unwrap(),
            "https://api.themoviedb.org/3/movie/popular?language=en-US&page=1"
        );
        assert_eq!(
            build_url(CatalogEndpoint::TopRated, &request).unwrap(),
            "https://api.themoviedb.org/3/movie/top_rated?language=en-US&page=1"
        );
        assert_eq!(
            build_url(CatalogEndpoint::Trending, &request).unwrap(),
            "https://api.themoviedb.org/3/trending/movie/week?language=en-US"
        );
    }

    #[test]
    fn test_page_is_normalized_to_at_least_one() {
        let request = CatalogRequest {
            page: Some(0),
            ..Default::default()
        };
        let url = build_url(CatalogEndpoint::Upcoming, &request).unwrap();
        assert!(url.ends_with("page=1"));
    }

    #[test]
    fn test_details_url_requires_id() {
        let request = CatalogRequest {
            tmdb_id: Some(438631),
            language: Some("de-DE".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_url(CatalogEndpoint::Details, &request).unwrap(),
            "https://api.themoviedb.org/3/movie/438631?language=de-DE"
        );
        assert!(matches!(
            build_url(CatalogEndpoint::Details, &CatalogRequest::default()),
            Err(CatalogError::BadRequest(_))
        ));
    }

    #[test]
    fn test_endpoint_parses_both_spellings() {
        assert_eq!(
            "top-rated".parse::<CatalogEndpoint>().unwrap(),
            CatalogEndpoint::TopRated
        );
        assert_eq!(
            "TOP_RATED".parse::<CatalogEndpoint>().unwrap(),
            CatalogEndpoint::TopRated
        );
        assert!("nope".parse::<CatalogEndpoint>().is_err());
    }

    #[test]
    fn test_release_year_parses_leading_year() {
        let mut movie: CatalogMovie = serde_json::from_str(
            r#"{"id": 1, "title": "Dune", "release_date": "2021-10-22"}"#,
        )
        .unwrap();
        assert_eq!(movie.release_year(), Some(2021));

        movie.release_date = Some(String::new());
        assert_eq!(movie.release_year(), None);
        movie.release_date = Some("soon".to_string());
        assert_eq!(movie.release_year(), None);
        movie.release_date = None;
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = r#"{"id": 1, "title": "Dune", "popularity": 843.2, "video": false}"#;
        let movie: CatalogMovie = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back["popularity"], 843.2);
        assert_eq!(back["video"], false);
    }
}
