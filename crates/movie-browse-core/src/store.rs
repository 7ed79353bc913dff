use movie_browse_models::WatchlistEntry;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Result of an `add` call. The store is idempotent by id, so attempting to
/// add an id that is already tracked is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of a `remove` call. Removing an id that is not tracked is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// The ordered, id-deduplicated set of tracked movies, mirrored to a single
/// JSON file on every mutation.
///
/// The in-memory collection is the source of truth for the running session;
/// the file is a write-through copy. Load failures never propagate: a
/// missing or malformed file yields an empty collection and the next
/// successful mutation overwrites it.
pub struct WatchlistStore {
    path: PathBuf,
    entries: Vec<WatchlistEntry>,
}

impl WatchlistStore {
    /// Open the store backed by `path`, deserializing persisted state if
    /// present and well-formed.
    pub fn load(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<WatchlistEntry>>(&content) {
                Ok(entries) => {
                    debug!("Loaded watchlist: {} entries from {:?}", entries.len(), path);
                    entries
                }
                Err(e) => {
                    warn!(
                        "Malformed watchlist data at {:?}: {}. Starting with an empty watchlist; the file is overwritten on the next change.",
                        path, e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No watchlist file at {:?}, starting empty", path);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read watchlist file {:?}: {}. Starting empty.", path, e);
                Vec::new()
            }
        };

        Self { path, entries }
    }

    /// Append `entry` unless an entry with the same id is already tracked.
    /// The first insertion wins: an existing entry is never replaced.
    pub fn add(&mut self, entry: WatchlistEntry) -> AddOutcome {
        if self.contains(entry.id) {
            debug!("Watchlist add: id={} already present", entry.id);
            return AddOutcome::AlreadyPresent;
        }

        debug!("Watchlist add: id={} title={:?}", entry.id, entry.title);
        self.entries.push(entry);
        self.persist();
        AddOutcome::Added
    }

    /// Remove the entry with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: u64) -> RemoveOutcome {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() == before {
            debug!("Watchlist remove: id={} not present", id);
            return RemoveOutcome::NotFound;
        }

        debug!("Watchlist remove: id={}", id);
        self.persist();
        RemoveOutcome::Removed
    }

    /// The current collection in insertion order.
    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Write-through mirror of the in-memory state. A failed write is logged
    // and swallowed: the in-memory collection stays authoritative for the
    // session and the next mutation retries the write.
    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create watchlist directory {:?}: {}", parent, e);
                return;
            }
        }

        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    warn!("Failed to write watchlist file {:?}: {}", self.path, e);
                } else {
                    debug!("Watchlist saved: {} entries to {:?}", self.entries.len(), self.path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize watchlist: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(id: u64, title: &str) -> WatchlistEntry {
        WatchlistEntry {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/poster-{}.jpg", id)),
        }
    }

    fn store_in(dir: &TempDir) -> WatchlistStore {
        WatchlistStore::load(dir.path().join("watchlist.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_is_idempotent_by_id() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.add(entry(1, "A")), AddOutcome::Added);
        assert_eq!(store.add(entry(1, "A")), AddOutcome::AlreadyPresent);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_first_insertion_wins_and_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add(entry(1, "A"));
        store.add(entry(2, "B"));
        assert_eq!(store.add(entry(1, "A2")), AddOutcome::AlreadyPresent);

        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add(entry(1, "A"));
        assert_eq!(store.remove(99), RemoveOutcome::NotFound);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add(entry(1, "A"));
        store.add(entry(2, "B"));
        assert_eq!(store.remove(1), RemoveOutcome::Removed);

        let ids: Vec<u64> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_no_duplicate_ids_after_mixed_operations() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add(entry(1, "A"));
        store.add(entry(2, "B"));
        store.remove(1);
        store.add(entry(1, "A again"));
        store.add(entry(2, "B again"));
        store.add(entry(3, "C"));

        let mut ids: Vec<u64> = store.entries().iter().map(|e| e.id).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_persist_then_reload_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");

        let mut store = WatchlistStore::load(path.clone());
        store.add(entry(3, "C"));
        store.add(entry(1, "A"));
        store.add(entry(2, "B"));

        let reloaded = WatchlistStore::load(path);
        assert_eq!(reloaded.entries(), store.entries());
        let ids: Vec<u64> = reloaded.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_malformed_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = WatchlistStore::load(path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_matches_memory_after_each_mutation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");
        let mut store = WatchlistStore::load(path.clone());

        store.add(entry(1, "A"));
        let on_disk: Vec<WatchlistEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, store.entries());

        store.remove(1);
        let on_disk: Vec<WatchlistEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(on_disk.is_empty());
    }
}
