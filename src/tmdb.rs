use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<MovieCandidate>,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        image_base_url: String,
    ) -> Self {
        Self { client, api_key, base_url, image_base_url }
    }

    /// One page of search results, passed through as the provider returns
    /// them. Network errors and non-2xx responses propagate to the caller.
    pub async fn search_movies(&self, title: &str) -> AppResult<Vec<MovieCandidate>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.results)
    }

    pub async fn movie_details(&self, tmdb_id: i64) -> AppResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        let details: MovieDetails = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(details)
    }

    /// Details for obscure titles often carry no poster path; fall back to
    /// the bare image host so the stored url is never empty.
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        let base = self.image_base_url.trim_end_matches('/');
        match poster_path {
            Some(path) => format!("{base}{path}"),
            None => base.to_string(),
        }
    }
}

/// The four-digit year is the portion of the release-date string before the
/// first `-` separator.
pub fn release_year(release_date: &str) -> AppResult<i32> {
    release_date
        .split('-')
        .next()
        .and_then(|y| y.parse().ok())
        .ok_or_else(|| AppError::Validation(format!("unparseable release date: {release_date}")))
}
