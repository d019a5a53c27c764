use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TMDB API token is invalid or missing")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("TMDB request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("TMDB request failed: {0}")]
    Http(#[from] reqwest::Error),
}
