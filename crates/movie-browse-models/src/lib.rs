pub mod genre;
pub mod movie;
pub mod page;
pub mod video;
pub mod watchlist;

pub use genre::Genre;
pub use movie::{MovieDetails, MovieSummary};
pub use page::Page;
pub use video::{select_trailer, Video, YOUTUBE_WATCH_BASE};
pub use watchlist::WatchlistEntry;
