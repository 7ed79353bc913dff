/// Filter state a browse view composes its listing request from.
///
/// Endpoint selection mirrors the discover page: a text query wins over a
/// genre filter, and with neither the unfiltered discover listing is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseQuery {
    pub genre: Option<u64>,
    pub text: Option<String>,
    pub page: u32,
}

impl BrowseQuery {
    pub fn new(page: u32) -> Self {
        Self {
            genre: None,
            text: None,
            page,
        }
    }

    pub fn with_genre(mut self, genre: Option<u64>) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        // An empty or whitespace query means "no text filter"
        self.text = text.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Time window for the trending listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    Day,
    Week,
}

impl TrendingWindow {
    pub fn as_path(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_filter_is_dropped() {
        let query = BrowseQuery::new(1).with_text(Some("   ".to_string()));
        assert_eq!(query.text, None);

        let query = BrowseQuery::new(1).with_text(Some("matrix".to_string()));
        assert_eq!(query.text.as_deref(), Some("matrix"));
    }

    #[test]
    fn test_trending_window_paths() {
        assert_eq!(TrendingWindow::Day.as_path(), "day");
        assert_eq!(TrendingWindow::Week.as_path(), "week");
    }
}
