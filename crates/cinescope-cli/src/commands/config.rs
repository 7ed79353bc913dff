use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_browse_config::{Config, CredentialStore, PathManager};

use crate::commands::prompts;
use crate::output::Output;
use crate::ConfigCommands;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => run_show(full, output),
        ConfigCommands::SetKey { api_key } => run_set_key(api_key, output),
        ConfigCommands::SetLanguage { language } => run_set_language(language, output),
    }
}

fn run_show(full: bool, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;

    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let api_key_display = match credentials.get_tmdb_api_key() {
        Some(key) if full => key.clone(),
        Some(key) => mask_string(key),
        None => "(not set)".to_string(),
    };

    if !output.is_human() {
        output.json(&serde_json::json!({
            "config_file": paths.config_file(),
            "watchlist_file": paths.watchlist_file(),
            "language": config.catalog.language,
            "poster_size": config.catalog.poster_size,
            "backdrop_size": config.catalog.backdrop_size,
            "api_key": api_key_display,
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Config file"),
        Cell::new(paths.config_file().display()),
    ]);
    table.add_row(vec![
        Cell::new("Watchlist file"),
        Cell::new(paths.watchlist_file().display()),
    ]);
    table.add_row(vec![
        Cell::new("Language"),
        Cell::new(&config.catalog.language),
    ]);
    table.add_row(vec![
        Cell::new("Poster size"),
        Cell::new(&config.catalog.poster_size),
    ]);
    table.add_row(vec![
        Cell::new("Backdrop size"),
        Cell::new(&config.catalog.backdrop_size),
    ]);
    table.add_row(vec![Cell::new("API key"), Cell::new(api_key_display)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    output.heading("Configuration");
    output.println(table.to_string());

    if credentials.get_tmdb_api_key().is_none() {
        output.warn("No API key configured. Run `cinescope config set-key` to store one.");
    }

    Ok(())
}

fn run_set_key(api_key: Option<String>, output: &Output) -> Result<()> {
    let key = match api_key {
        Some(key) => key,
        None => prompts::prompt_secret("API access key")?,
    };

    if key.trim().is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let paths = PathManager::default();
    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directories: {}", e))?;

    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    credentials.set_tmdb_api_key(key.trim().to_string());
    credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success("API key saved");
    Ok(())
}

fn run_set_language(language: String, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;

    config.catalog.language = language;
    config
        .validate()
        .map_err(|e| eyre!("Invalid config: {}", e))?;
    config
        .save_to_file(&paths.config_file())
        .map_err(|e| eyre!("Failed to save config: {}", e))?;

    output.success(format!("Catalog language set to {}", config.catalog.language));
    Ok(())
}

fn mask_string(s: &str) -> String {
    let count = s.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let first: String = s.chars().take(2).collect();
    let last: String = s.chars().skip(count - 2).collect();
    format!("{}****{}", first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string_hides_middle() {
        assert_eq!(mask_string("abcdefgh"), "ab****gh");
        assert_eq!(mask_string("abc"), "****");
    }
}
