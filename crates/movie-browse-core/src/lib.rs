pub mod generation;
pub mod paging;
pub mod store;

pub use generation::QueryGuard;
pub use paging::{clamp_page, floor_page};
pub use store::{AddOutcome, RemoveOutcome, WatchlistStore};
