use crate::status::MovieStatus;

/// Which editable fields a status allows.
///
/// Ratings and reviews only make sense for movies that have been watched,
/// while a price estimate applies to anything owned or watched. Edits and
/// rendering both consult this so disallowed fields are cleared rather than
/// carried along silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub rating: bool,
    pub review: bool,
    pub price: bool,
}

impl FieldPolicy {
    pub fn for_status(status: MovieStatus) -> Self {
        let watched = status == MovieStatus::Watched;
        let owned_or_watched = matches!(status, MovieStatus::Owned | MovieStatus::Watched);
        FieldPolicy {
            rating: watched,
            review: watched,
            price: owned_or_watched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_allows_nothing() {
        let policy = FieldPolicy::for_status(MovieStatus::Wishlist);
        assert!(!policy.rating);
        assert!(!policy.review);
        assert!(!policy.price);
    }

    #[test]
    fn test_owned_allows_only_price() {
        let policy = FieldPolicy::for_status(MovieStatus::Owned);
        assert!(!policy.rating);
        assert!(!policy.review);
        assert!(policy.price);
    }

    #[test]
    fn test_watched_allows_everything() {
        let policy = FieldPolicy::for_status(MovieStatus::Watched);
        assert!(policy.rating);
        assert!(policy.review);
        assert!(policy.price);
    }
}
