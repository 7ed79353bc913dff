use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    /// BCP 47 language tag sent with every catalog request.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_poster_size")]
    pub poster_size: String,
    #[serde(default = "default_backdrop_size")]
    pub backdrop_size: String,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_poster_size() -> String {
    "w500".to_string()
}

fn default_backdrop_size() -> String {
    "original".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            poster_size: default_poster_size(),
            backdrop_size: default_backdrop_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, or fall back to defaults when it does not exist yet.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.catalog.language.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.language cannot be empty"));
        }
        if self.catalog.poster_size.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.poster_size cannot be empty"));
        }
        if self.catalog.backdrop_size.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.backdrop_size cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            catalog: CatalogConfig {
                language: "fr-FR".to_string(),
                ..CatalogConfig::default()
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.catalog.language, "fr-FR");
        assert_eq!(loaded.catalog.poster_size, "w500");
        assert_eq!(loaded.catalog.backdrop_size, "original");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.catalog.language, "en-US");
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.catalog.language = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_table_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.language, "en-US");
    }
}
