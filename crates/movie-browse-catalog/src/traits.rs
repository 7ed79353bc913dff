use async_trait::async_trait;
use movie_browse_models::{Genre, MovieDetails, MovieSummary, Page, Video};

use crate::error::CatalogError;
use crate::query::{BrowseQuery, TrendingWindow};

/// The remote movie catalog, as consumed by the views.
///
/// Every operation is a single read-only request/response with no retry; a
/// failure leaves whatever the caller already rendered untouched.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Ordered list of movie genres.
    async fn genres(&self) -> Result<Vec<Genre>, CatalogError>;

    /// One page of the listing selected by `query` (search, genre discover,
    /// or plain discover).
    async fn browse(&self, query: &BrowseQuery) -> Result<Page<MovieSummary>, CatalogError>;

    /// Trending movies for the given window.
    async fn trending(&self, window: TrendingWindow) -> Result<Page<MovieSummary>, CatalogError>;

    /// Movies currently playing in theatres.
    async fn now_playing(&self) -> Result<Page<MovieSummary>, CatalogError>;

    /// Full detail record for one movie.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError>;

    /// Video references for one movie (trailers, teasers, clips).
    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError>;

    /// Movies similar to the given one.
    async fn similar(&self, id: u64) -> Result<Page<MovieSummary>, CatalogError>;

    /// Image URL for a poster path from a listing or detail record.
    fn poster_url(&self, path: &str) -> String;

    /// Image URL for a backdrop path.
    fn backdrop_url(&self, path: &str) -> String;
}
