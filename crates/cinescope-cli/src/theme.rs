use clap::ValueEnum;
use owo_colors::OwoColorize;

/// Two-valued output palette for the current invocation. Selected by the
/// `--theme` flag and applied to every view; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Section headings (view titles, movie titles).
    pub fn heading(&self, text: &str) -> String {
        match self {
            Theme::Light => text.blue().bold().to_string(),
            Theme::Dark => text.bright_cyan().bold().to_string(),
        }
    }

    /// Highlighted values (ratings, page indicators, trailer links).
    pub fn accent(&self, text: &str) -> String {
        match self {
            Theme::Light => text.yellow().to_string(),
            Theme::Dark => text.bright_yellow().to_string(),
        }
    }

    /// De-emphasized detail (paths, URLs, counts).
    pub fn dim(&self, text: &str) -> String {
        match self {
            Theme::Light => text.dimmed().to_string(),
            Theme::Dark => text.bright_black().to_string(),
        }
    }
}
