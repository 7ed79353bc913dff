use serde::{Deserialize, Serialize};

use crate::movie::{MovieDetails, MovieSummary};

/// One tracked movie. `title` and `poster_path` are copied at insertion
/// time and never re-synced with the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub id: u64,
    pub title: String,
    #[serde(rename = "posterPath", skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

impl From<&MovieSummary> for WatchlistEntry {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
        }
    }
}

impl From<&MovieDetails> for WatchlistEntry {
    fn from(movie: &MovieDetails) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let entry = WatchlistEntry {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 603);
        assert_eq!(json["title"], "The Matrix");
        assert_eq!(json["posterPath"], "/matrix.jpg");
    }

    #[test]
    fn test_absent_poster_is_omitted_and_round_trips() {
        let entry = WatchlistEntry {
            id: 1,
            title: "Untitled".to_string(),
            poster_path: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("posterPath"));

        let back: WatchlistEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
