use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::genre::Genre;

/// One movie as it appears in listing responses (discover, search,
/// trending, now-playing, similar).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    pub release_date: Option<String>,
}

/// Full detail record for a single movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    /// Release year, when the release date parses as a calendar date.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| chrono::Datelike::year(&d))
    }

    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year_parses_date() {
        let details = MovieDetails {
            id: 603,
            title: "The Matrix".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 8.2,
            release_date: Some("1999-03-30".to_string()),
            genres: vec![],
        };
        assert_eq!(details.release_year(), Some(1999));
    }

    #[test]
    fn test_release_year_absent_or_malformed() {
        let mut details = MovieDetails {
            id: 1,
            title: "Untitled".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 0.0,
            release_date: None,
            genres: vec![],
        };
        assert_eq!(details.release_year(), None);

        details.release_date = Some("next year".to_string());
        assert_eq!(details.release_year(), None);
    }

    #[test]
    fn test_genre_names_joined() {
        let details = MovieDetails {
            id: 1,
            title: "Untitled".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 0.0,
            release_date: None,
            genres: vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 878, name: "Science Fiction".to_string() },
            ],
        };
        assert_eq!(details.genre_names(), "Action, Science Fiction");
    }
}
