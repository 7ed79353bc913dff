use anyhow::{anyhow, Result};
use movie_browse_models::{Genre, MovieDetails, MovieSummary, Page, Video};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::query::TrendingWindow;

pub const API_BASE: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    results: Vec<Video>,
}

fn build_url(endpoint: &str, api_key: &str, language: &str) -> String {
    format!(
        "{}{}?api_key={}&language={}",
        API_BASE, endpoint, api_key, language
    )
}

async fn get_json<T>(client: &Client, url: &str, what: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!("Failed to fetch {}: {} - {}", what, status, error_text));
    }

    let parsed = response.json::<T>().await?;
    Ok(parsed)
}

/// Fetch the movie genre list.
pub async fn get_genres(client: &Client, api_key: &str, language: &str) -> Result<Vec<Genre>> {
    let url = build_url("/genre/movie/list", api_key, language);
    let response: GenreListResponse = get_json(client, &url, "genre list").await?;

    debug!("Fetched genres: count={}", response.genres.len());
    Ok(response.genres)
}

/// Fetch one page of the unfiltered or genre-filtered discover listing.
pub async fn discover_movies(
    client: &Client,
    api_key: &str,
    language: &str,
    genre: Option<u64>,
    page: u32,
) -> Result<Page<MovieSummary>> {
    let mut url = build_url("/discover/movie", api_key, language);
    if let Some(genre_id) = genre {
        url.push_str(&format!("&with_genres={}", genre_id));
    }
    url.push_str(&format!("&page={}", page));

    let response: Page<MovieSummary> = get_json(client, &url, "discover listing").await?;

    debug!(
        "Fetched discover: genre={:?}, page={}/{}, results={}",
        genre,
        response.page,
        response.total_pages,
        response.results.len()
    );
    Ok(response)
}

/// Fetch one page of text search results.
pub async fn search_movies(
    client: &Client,
    api_key: &str,
    language: &str,
    query: &str,
    page: u32,
) -> Result<Page<MovieSummary>> {
    let mut url = build_url("/search/movie", api_key, language);
    url.push_str(&format!("&query={}&page={}", urlencoding::encode(query), page));

    let response: Page<MovieSummary> = get_json(client, &url, "search results").await?;

    debug!(
        "Fetched search: query={:?}, page={}/{}, results={}",
        query,
        response.page,
        response.total_pages,
        response.results.len()
    );
    Ok(response)
}

/// Fetch the trending listing for a day or week window.
pub async fn get_trending(
    client: &Client,
    api_key: &str,
    language: &str,
    window: TrendingWindow,
) -> Result<Page<MovieSummary>> {
    let url = build_url(&format!("/trending/movie/{}", window.as_path()), api_key, language);
    let response: Page<MovieSummary> = get_json(client, &url, "trending listing").await?;

    debug!(
        "Fetched trending/{}: results={}",
        window.as_path(),
        response.results.len()
    );
    Ok(response)
}

/// Fetch the now-playing listing.
pub async fn get_now_playing(
    client: &Client,
    api_key: &str,
    language: &str,
) -> Result<Page<MovieSummary>> {
    let url = build_url("/movie/now_playing", api_key, language);
    let response: Page<MovieSummary> = get_json(client, &url, "now-playing listing").await?;

    debug!("Fetched now_playing: results={}", response.results.len());
    Ok(response)
}

/// Fetch the full detail record for one movie.
pub async fn get_movie(
    client: &Client,
    api_key: &str,
    language: &str,
    id: u64,
) -> Result<MovieDetails> {
    let url = build_url(&format!("/movie/{}", id), api_key, language);
    let movie: MovieDetails = get_json(client, &url, "movie details").await?;

    debug!("Fetched movie details: id={}, title={:?}", movie.id, movie.title);
    Ok(movie)
}

/// Fetch the video references for one movie. The listing is not
/// language-filtered: a localized language tag would hide trailers only
/// published under the original language.
pub async fn get_videos(client: &Client, api_key: &str, id: u64) -> Result<Vec<Video>> {
    let url = format!("{}/movie/{}/videos?api_key={}", API_BASE, id, api_key);
    let response: VideoListResponse = get_json(client, &url, "movie videos").await?;

    debug!("Fetched videos: id={}, count={}", id, response.results.len());
    Ok(response.results)
}

/// Fetch movies similar to the given one.
pub async fn get_similar(
    client: &Client,
    api_key: &str,
    language: &str,
    id: u64,
) -> Result<Page<MovieSummary>> {
    let url = build_url(&format!("/movie/{}/similar", id), api_key, language);
    let response: Page<MovieSummary> = get_json(client, &url, "similar movies").await?;

    debug!("Fetched similar: id={}, results={}", id, response.results.len());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_carries_key_and_language() {
        let url = build_url("/discover/movie", "secret", "en-US");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/discover/movie?api_key=secret&language=en-US"
        );
    }

    #[test]
    fn test_listing_response_parses() {
        let json = r#"{
            "page": 2,
            "results": [
                {
                    "id": 603,
                    "title": "The Matrix",
                    "overview": "A computer hacker learns the truth.",
                    "poster_path": "/matrix.jpg",
                    "backdrop_path": null,
                    "vote_average": 8.2,
                    "release_date": "1999-03-30",
                    "popularity": 91.5
                }
            ],
            "total_pages": 42,
            "total_results": 833
        }"#;

        let page: Page<MovieSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 42);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "The Matrix");
        assert_eq!(page.results[0].backdrop_path, None);
    }

    #[test]
    fn test_genre_list_response_parses() {
        let json = r#"{"genres":[{"id":28,"name":"Action"},{"id":35,"name":"Comedy"}]}"#;
        let response: GenreListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.genres.len(), 2);
        assert_eq!(response.genres[0].name, "Action");
    }

    #[test]
    fn test_video_list_response_parses_and_ignores_extras() {
        let json = r#"{
            "id": 603,
            "results": [
                {"type": "Trailer", "site": "YouTube", "key": "m8e-FF8MsqU",
                 "name": "Official Trailer", "official": true, "size": 1080}
            ]
        }"#;
        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert!(response.results[0].is_youtube_trailer());
    }

    #[test]
    fn test_details_response_parses() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A computer hacker learns the truth.",
            "poster_path": "/matrix.jpg",
            "backdrop_path": "/matrix-backdrop.jpg",
            "vote_average": 8.2,
            "release_date": "1999-03-30",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "runtime": 136,
            "status": "Released"
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.release_year(), Some(1999));
    }
}
