use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// BCP 47 language tag passed to the movie catalog
    #[serde(default = "default_language")]
    pub language: String,
    /// How many genres the dashboard ranking shows
    #[serde(default = "default_top_genres_limit")]
    pub top_genres_limit: usize,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_top_genres_limit() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            top_genres_limit: default_top_genres_limit(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config, falling back to defaults when no file exists yet
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
        if self.language.trim().is_empty() {
            return Err(anyhow::anyhow!("language cannot be empty"));
        }
        if self.top_genres_limit == 0 {
            return Err(anyhow::anyhow!("top_genres_limit must be at least 1"));
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
            language: "de-DE".to_string(),
            top_genres_limit: 6,
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.language, "de-DE");
        assert_eq!(loaded.top_genres_limit, 6);
    }

    #[test]
    fn test_config_load_or_default_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.language, "en-US");
        assert_eq!(config.top_genres_limit, 4);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        std::fs::write(&path, "language = \"fr-FR\"\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.language, "fr-FR");
        assert_eq!(loaded.top_genres_limit, 4);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.top_genres_limit = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.language = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
