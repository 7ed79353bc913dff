use std::sync::atomic::{AtomicU64, Ordering};

/// Last-relevant-response-wins guard for one logical query.
///
/// Each request issued for the query takes a monotonically increasing
/// generation via [`QueryGuard::issue`]. When its response arrives, the
/// caller checks [`QueryGuard::is_current`]: a response whose generation has
/// been superseded by a newer issue must be discarded instead of applied, so
/// a slow stale response can never overwrite fresher results.
#[derive(Debug, Default)]
pub struct QueryGuard {
    latest: AtomicU64,
}

impl QueryGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request. The returned generation stays current until the
    /// next call to `issue`.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response tagged with `generation` is still the latest
    /// issued request for this query.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}
