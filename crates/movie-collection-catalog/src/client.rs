use std::collections::HashMap;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{
    self, CatalogEndpoint, CatalogMovie, CatalogRequest, GenreListResponse, GenreRef,
    MovieListResponse,
};
use crate::error::CatalogError;

/// HTTP client for the TMDB catalog, holding the bearer token for every call
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    access_token: String,
}

impl CatalogClient {
    pub fn new(access_token: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }

    /// Fetch a page of list results. With `include_genres` set, the genre
    /// dictionary is fetched alongside and each result's `genre_ids` are
    /// resolved to names; ids the dictionary does not know are skipped.
    pub async fn fetch_list(
        &self,
        endpoint: CatalogEndpoint,
        request: &CatalogRequest,
    ) -> Result<MovieListResponse, CatalogError> {
        let url = api::build_url(endpoint, request)?;

        if request.include_genres {
            let language = request.language.as_deref().unwrap_or(api::DEFAULT_LANGUAGE);
            let (mut list, genre_names) = futures::try_join!(
                self.fetch_json::<MovieListResponse>(&url),
                self.fetch_genre_map(language)
            )?;
            annotate_genres(&mut list.results, &genre_names);
            Ok(list)
        } else {
            self.fetch_json(&url).await
        }
    }

    /// Fetch full details for one movie, including its genre records
    pub async fn fetch_details(&self, request: &CatalogRequest) -> Result<CatalogMovie, CatalogError> {
        let url = api::build_url(CatalogEndpoint::Details, request)?;
        self.fetch_json(&url).await
    }

    async fn fetch_genre_map(&self, language: &str) -> Result<HashMap<u64, String>, CatalogError> {
        let url = api::genre_list_url(language);
        let response: GenreListResponse = self.fetch_json(&url).await?;
        Ok(response
            .genres
            .into_iter()
            .map(|genre| (genre.id, genre.name))
            .collect())
    }

    async fn fetch_json<T>(&self, url: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching catalog URL: {}", url);
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

fn annotate_genres(movies: &mut [CatalogMovie], names: &HashMap<u64, String>) {
    for movie in movies {
        if let Some(ids) = &movie.genre_ids {
            movie.genres = Some(
                ids.iter()
                    .filter_map(|id| {
                        names.get(id).map(|name| GenreRef {
                            id: *id,
                            name: name.clone(),
                        })
                    })
                    .collect(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_result(id: u64, title: &str, genre_ids: Option<Vec<u64>>) -> CatalogMovie {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "genre_ids": genre_ids,
        }))
        .unwrap()
    }

    #[test]
    fn test_annotate_genres_resolves_known_ids() {
        let mut movies = vec![create_result(1, "Dune", Some(vec![878, 12]))];
        let names = HashMap::from([
            (878, "Science Fiction".to_string()),
            (12, "Adventure".to_string()),
        ]);

        annotate_genres(&mut movies, &names);
        assert_eq!(
            movies[0].genre_names(),
            vec!["Science Fiction", "Adventure"]
        );
    }

    #[test]
    fn test_annotate_genres_skips_unknown_ids() {
        let mut movies = vec![create_result(1, "Dune", Some(vec![878, 9999]))];
        let names = HashMap::from([(878, "Science Fiction".to_string())]);

        annotate_genres(&mut movies, &names);
        assert_eq!(movies[0].genre_names(), vec!["Science Fiction"]);
    }

    #[test]
    fn test_annotate_genres_leaves_idless_results_alone() {
        let mut movies = vec![create_result(1, "Dune", None)];
        let names = HashMap::from([(878, "Science Fiction".to_string())]);

        annotate_genres(&mut movies, &names);
        assert!(movies[0].genres.is_none());
    }
}
