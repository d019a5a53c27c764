pub mod movie;
pub mod policy;
pub mod status;

pub use movie::{
    coerce_price, format_currency, rating_stars, GenreEntry, Movie, PriceValue,
    TMDB_POSTER_BASE_URL,
};
pub use policy::FieldPolicy;
pub use status::MovieStatus;
