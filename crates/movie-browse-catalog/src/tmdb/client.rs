use anyhow::Result;
use async_trait::async_trait;
use movie_browse_config::CatalogConfig;
use movie_browse_models::{Genre, MovieDetails, MovieSummary, Page, Video};
use reqwest::Client;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::query::{BrowseQuery, TrendingWindow};
use crate::tmdb::api;
use crate::traits::Catalog;

/// Catalog client for the TMDB HTTP API. Pure request/response: no retry,
/// no backoff, no caching.
#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    api_key: Option<String>,
    language: String,
    poster_size: String,
    backdrop_size: String,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>, language: String) -> Self {
        Self::with_config(api_key, &CatalogConfig { language, ..CatalogConfig::default() })
    }

    pub fn with_config(api_key: Option<String>, config: &CatalogConfig) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            language: config.language.clone(),
            poster_size: config.poster_size.clone(),
            backdrop_size: config.backdrop_size.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, CatalogError> {
        self.api_key.as_deref().ok_or_else(CatalogError::missing_key)
    }
}

fn to_catalog_error(e: anyhow::Error) -> CatalogError {
    CatalogError::new(format!("{}", e))
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let api_key = self.api_key()?;
        api::get_genres(&self.client, api_key, &self.language)
            .await
            .map_err(to_catalog_error)
    }

    async fn browse(&self, query: &BrowseQuery) -> Result<Page<MovieSummary>, CatalogError> {
        let api_key = self.api_key()?;

        // A text query selects the search endpoint; otherwise discover,
        // genre-filtered when a genre is set.
        let result = match &query.text {
            Some(text) => {
                api::search_movies(&self.client, api_key, &self.language, text, query.page).await
            }
            None => {
                api::discover_movies(&self.client, api_key, &self.language, query.genre, query.page)
                    .await
            }
        };

        result.map_err(to_catalog_error)
    }

    async fn trending(&self, window: TrendingWindow) -> Result<Page<MovieSummary>, CatalogError> {
        let api_key = self.api_key()?;
        api::get_trending(&self.client, api_key, &self.language, window)
            .await
            .map_err(to_catalog_error)
    }

    async fn now_playing(&self) -> Result<Page<MovieSummary>, CatalogError> {
        let api_key = self.api_key()?;
        api::get_now_playing(&self.client, api_key, &self.language)
            .await
            .map_err(to_catalog_error)
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        let api_key = self.api_key()?;
        api::get_movie(&self.client, api_key, &self.language, id)
            .await
            .map_err(to_catalog_error)
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        let api_key = self.api_key()?;
        api::get_videos(&self.client, api_key, id)
            .await
            .map_err(to_catalog_error)
    }

    async fn similar(&self, id: u64) -> Result<Page<MovieSummary>, CatalogError> {
        let api_key = self.api_key()?;
        api::get_similar(&self.client, api_key, &self.language, id)
            .await
            .map_err(to_catalog_error)
    }

    fn poster_url(&self, path: &str) -> String {
        format!("{}/{}{}", api::IMAGE_BASE, self.poster_size, path)
    }

    fn backdrop_url(&self, path: &str) -> String {
        format!("{}/{}{}", api::IMAGE_BASE, self.backdrop_size, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_every_call_uniformly() {
        let client = TmdbClient::new(None, "en-US".to_string());
        assert!(!client.has_api_key());
        assert!(client.api_key().is_err());

        // Blank keys count as missing
        let client = TmdbClient::new(Some("   ".to_string()), "en-US".to_string());
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_image_urls_use_configured_sizes() {
        let client = TmdbClient::new(Some("k".to_string()), "en-US".to_string());
        assert_eq!(
            client.poster_url("/matrix.jpg"),
            "https://image.tmdb.org/t/p/w500/matrix.jpg"
        );
        assert_eq!(
            client.backdrop_url("/matrix.jpg"),
            "https://image.tmdb.org/t/p/original/matrix.jpg"
        );
    }
}
