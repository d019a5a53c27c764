pub mod api;
pub mod client;
pub mod error;

pub use api::{
    CatalogEndpoint, CatalogMovie, CatalogRequest, GenreRef, MovieListResponse,
    DEFAULT_LANGUAGE, TMDB_API_BASE_URL,
};
pub use client::CatalogClient;
pub use error::CatalogError;
