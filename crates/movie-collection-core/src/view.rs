use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use movie_collection_models::{Movie, MovieStatus};

/// Direction for one sort key. `None` means the key is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::None => "none",
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn order(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Desc => ordering.reverse(),
            _ => ordering,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SortDirection::None),
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!(
                "Invalid sort direction: {}. Use 'none', 'asc', or 'desc'",
                s
            )),
        }
    }
}

/// Filter and sort selection for the collection browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    /// Case-insensitive title substring; blank matches everything
    pub query: String,
    /// Genre labels to keep; empty keeps everything
    pub genres: Vec<String>,
    /// Statuses to keep; empty keeps everything
    pub statuses: Vec<MovieStatus>,
    pub rating_sort: SortDirection,
    pub year_sort: SortDirection,
}

/// Apply the browser view to a collection: AND-combined filters, then at most
/// one active sort. The rating sort wins outright over the year sort; when
/// both are inactive the filtered movies keep their input order. The input is
/// never mutated.
pub fn apply_view(movies: &[Movie], params: &ViewParams) -> Vec<Movie> {
    let query = params.query.trim().to_lowercase();
    let genres: Vec<String> = params
        .genres
        .iter()
        .map(|genre| genre.to_lowercase())
        .collect();

    let mut filtered: Vec<Movie> = movies
        .iter()
        .filter(|movie| {
            let title_hit = query.is_empty() || movie.title.to_lowercase().contains(&query);
            let genre_hit = genres.is_empty()
                || movie
                    .genre_labels()
                    .iter()
                    .any(|label| genres.contains(&label.to_lowercase()));
            let status_hit =
                params.statuses.is_empty() || params.statuses.contains(&movie.status);
            title_hit && genre_hit && status_hit
        })
        .cloned()
        .collect();

    match (params.rating_sort, params.year_sort) {
        (SortDirection::None, SortDirection::None) => {}
        (SortDirection::None, year_sort) => {
            filtered.sort_by(|a, b| compare_by_year(a, b, year_sort));
        }
        (rating_sort, _) => {
            filtered.sort_by(|a, b| compare_by_rating(a, b, rating_sort));
        }
    }

    filtered
}

/// Missing ratings compare below every real rating, then titles break ties
fn compare_by_rating(a: &Movie, b: &Movie, direction: SortDirection) -> Ordering {
    direction
        .order(a.rating.cmp(&b.rating))
        .then_with(|| a.title.cmp(&b.title))
}

/// Movies without a release year land at the end in both directions
fn compare_by_year(a: &Movie, b: &Movie, direction: SortDirection) -> Ordering {
    let ordering = match (a.release_year, b.release_year) {
        (Some(left), Some(right)) => direction.order(left.cmp(&right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    ordering.then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_collection_models::GenreEntry;

    fn create_movie(title: &str, status: MovieStatus, genres: &[&str]) -> Movie {
        Movie {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            release_year: Some(2020),
            status,
            rating: None,
            synopsis: None,
            personal_review: None,
            genres: Some(
                genres
                    .iter()
                    .map(|name| GenreEntry::Name(name.to_string()))
                    .collect(),
            ),
            tmdb_id: None,
            tmdb_poster_path: None,
            user_poster_url: None,
            estimated_price: None,
            watched_at: None,
        }
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|movie| movie.title.as_str()).collect()
    }

    #[test]
    fn test_all_filters_must_match() {
        let movies = vec![
            create_movie("Dune", MovieStatus::Owned, &["Sci-Fi"]),
            create_movie("Dune Part Two", MovieStatus::Wishlist, &["Sci-Fi", "Drama"]),
            create_movie("Clue", MovieStatus::Owned, &["Comedy"]),
        ];
        let params = ViewParams {
            query: "dune".to_string(),
            genres: vec!["sci-fi".to_string()],
            statuses: vec![MovieStatus::Owned],
            ..Default::default()
        };

        assert_eq!(titles(&apply_view(&movies, &params)), vec!["Dune"]);
    }

    #[test]
    fn test_blank_query_and_empty_sets_match_everything() {
        let movies = vec![
            create_movie("Dune", MovieStatus::Owned, &["Sci-Fi"]),
            create_movie("Clue", MovieStatus::Wishlist, &["Comedy"]),
        ];
        let params = ViewParams {
            query: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(apply_view(&movies, &params).len(), 2);
    }

    #[test]
    fn test_genre_filter_is_case_insensitive() {
        let movies = vec![create_movie("Dune", MovieStatus::Owned, &["Sci-Fi"])];
        let params = ViewParams {
            genres: vec!["SCI-FI".to_string()],
            ..Default::default()
        };

        assert_eq!(apply_view(&movies, &params).len(), 1);
    }

    #[test]
    fn test_no_active_sort_preserves_input_order() {
        let movies = vec![
            create_movie("Zodiac", MovieStatus::Owned, &[]),
            create_movie("Alien", MovieStatus::Owned, &[]),
            create_movie("Memento", MovieStatus::Wishlist, &[]),
        ];
        let params = ViewParams {
            statuses: vec![MovieStatus::Owned],
            ..Default::default()
        };

        assert_eq!(titles(&apply_view(&movies, &params)), vec!["Zodiac", "Alien"]);
    }

    #[test]
    fn test_rating_desc_breaks_ties_by_title() {
        let mut b = create_movie("B", MovieStatus::Watched, &[]);
        b.rating = None;
        let mut a = create_movie("A", MovieStatus::Watched, &[]);
        a.rating = None;
        let mut c = create_movie("C", MovieStatus::Watched, &[]);
        c.rating = Some(3);
        let params = ViewParams {
            rating_sort: SortDirection::Desc,
            ..Default::default()
        };

        assert_eq!(titles(&apply_view(&[b, a, c], &params)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_rating_asc_puts_missing_first() {
        let mut x = create_movie("X", MovieStatus::Watched, &[]);
        x.rating = Some(2);
        let mut y = create_movie("Y", MovieStatus::Watched, &[]);
        y.rating = None;
        let params = ViewParams {
            rating_sort: SortDirection::Asc,
            ..Default::default()
        };

        assert_eq!(titles(&apply_view(&[x, y], &params)), vec!["Y", "X"]);
    }

    #[test]
    fn test_missing_year_sorts_last_in_both_directions() {
        let mut x = create_movie("X", MovieStatus::Owned, &[]);
        x.release_year = Some(2000);
        let mut y = create_movie("Y", MovieStatus::Owned, &[]);
        y.release_year = None;

        let asc = ViewParams {
            year_sort: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(titles(&apply_view(&[x.clone(), y.clone()], &asc)), vec!["X", "Y"]);

        let desc = ViewParams {
            year_sort: SortDirection::Desc,
            ..Default::default()
        };
        assert_eq!(titles(&apply_view(&[y, x], &desc)), vec!["X", "Y"]);
    }

    #[test]
    fn test_rating_sort_wins_over_year_sort() {
        let mut old = create_movie("Old", MovieStatus::Watched, &[]);
        old.release_year = Some(1960);
        old.rating = Some(5);
        let mut new = create_movie("New", MovieStatus::Watched, &[]);
        new.release_year = Some(2023);
        new.rating = Some(1);
        let params = ViewParams {
            rating_sort: SortDirection::Desc,
            year_sort: SortDirection::Asc,
            ..Default::default()
        };

        assert_eq!(titles(&apply_view(&[new, old], &params)), vec!["Old", "New"]);
    }

    #[test]
    fn test_apply_view_is_idempotent() {
        let movies = vec![
            create_movie("Dune", MovieStatus::Owned, &["Sci-Fi"]),
            create_movie("Clue", MovieStatus::Owned, &["Comedy"]),
            create_movie("Alien", MovieStatus::Watched, &["Sci-Fi"]),
        ];
        let params = ViewParams {
            genres: vec!["sci-fi".to_string()],
            year_sort: SortDirection::Desc,
            ..Default::default()
        };

        let once = apply_view(&movies, &params);
        let twice = apply_view(&once, &params);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_direction_parses_and_displays() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!(" DESC ".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!("none".parse::<SortDirection>().unwrap(), SortDirection::None);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }
}
