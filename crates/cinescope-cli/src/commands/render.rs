use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use movie_browse_catalog::{CatalogError, TmdbClient};
use movie_browse_config::{Config, CredentialStore, PathManager};
use movie_browse_models::MovieSummary;
use std::io::IsTerminal;
use std::time::Duration;

/// Generic message shown for any remote-fetch failure. The detail goes to
/// the log stream, not the user.
pub const FAILED_TO_LOAD: &str = "Failed to load";

/// Resolve paths, config, and the stored API key into a ready catalog client.
pub fn catalog_client() -> Result<TmdbClient> {
    let paths = PathManager::default();

    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid config: {}", e))?;

    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    Ok(TmdbClient::with_config(
        credentials.get_tmdb_api_key().cloned(),
        &config.catalog,
    ))
}

/// Map a catalog failure to the generic user-facing message, keeping the
/// detail in the logs.
pub fn catalog_failure(e: CatalogError) -> color_eyre::Report {
    tracing::error!("Catalog request failed: {}", e);
    eyre!("{}", FAILED_TO_LOAD)
}

/// Loading indicator shown while requests are in flight. Hidden when stderr
/// is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(message.to_string());
    pb
}

/// Listing table shared by the home, browse, details, and watchlist views.
pub fn movie_table(movies: &[MovieSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Release").add_attribute(comfy_table::Attribute::Bold),
    ]);

    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(format!("{:.1}", movie.vote_average)),
            Cell::new(movie.release_date.as_deref().unwrap_or("-")),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Overview text shortened for listing contexts.
pub fn truncate_overview(overview: &str, max_chars: usize) -> String {
    if overview.chars().count() <= max_chars {
        return overview.to_string();
    }
    let cut: String = overview.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_overview_short_text_unchanged() {
        assert_eq!(truncate_overview("short", 150), "short");
    }

    #[test]
    fn test_truncate_overview_cuts_and_marks() {
        let long = "a".repeat(200);
        let cut = truncate_overview(&long, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_overview_is_char_safe() {
        let text = "é".repeat(10);
        let cut = truncate_overview(&text, 4);
        assert!(cut.starts_with("éééé"));
    }
}
