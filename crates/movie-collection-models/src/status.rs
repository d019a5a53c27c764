use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a movie in a collection. Exactly one at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovieStatus {
    /// Want to own or watch it
    Wishlist,
    /// On the shelf, not watched yet
    Owned,
    /// Watched (the only status where rating/review apply)
    Watched,
}

impl MovieStatus {
    /// Wire value, matches the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Wishlist => "wishlist",
            MovieStatus::Owned => "owned",
            MovieStatus::Watched => "watched",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            MovieStatus::Wishlist => "Wishlist",
            MovieStatus::Owned => "Owned",
            MovieStatus::Watched => "Watched",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MovieStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wishlist" => Ok(MovieStatus::Wishlist),
            "owned" => Ok(MovieStatus::Owned),
            "watched" => Ok(MovieStatus::Watched),
            other => Err(format!(
                "Invalid status: {}. Use 'wishlist', 'owned', or 'watched'",
                other
            )),
        }
    }
}
