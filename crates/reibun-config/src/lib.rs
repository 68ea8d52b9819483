use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::fields::FieldsConfig;
use self::tatoeba::TatoebaConfig;
use self::ui::UiConfig;

pub mod anki;
pub mod fields;
pub mod tatoeba;
pub mod ui;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_PATH: &str = "reibun.json";

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub fields: FieldsConfig,
    pub tatoeba: TatoebaConfig,
    pub anki: AnkiConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Read one config file. Keys left out fall back to their defaults,
    /// env overrides still win over file values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    /// Resolve the effective config: an explicit path must load,
    /// `reibun.json` in the working directory is picked up when present,
    /// otherwise built-in defaults apply.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_PATH);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::new())
                }
            }
        }
    }

    fn apply_env(&mut self) {
        self.tatoeba.apply_env();
        self.anki.apply_env();
        self.ui.apply_env();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fields: FieldsConfig::default(),
            tatoeba: TatoebaConfig::default(),
            anki: AnkiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let config = Config::default();

        assert_eq!(config.fields.japanese, "Sentence");
        assert_eq!(config.fields.translation, "SentenceTranslation");
        assert_eq!(config.tatoeba.url, "https://tatoeba.org/en/api_v0/search");
        assert_eq!(config.anki.url, "http://localhost:8765");
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "fields": { "japanese": "Expression" } }"#).unwrap();

        assert_eq!(config.fields.japanese, "Expression");
        assert_eq!(config.fields.translation, "SentenceTranslation");
        assert_eq!(config.tatoeba.url, "https://tatoeba.org/en/api_v0/search");
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let config: Config =
            serde_json::from_str(r#"{ "anki": { "url": "http://localhost:9999" }, "extra": 1 }"#)
                .unwrap();

        assert_eq!(config.anki.url, "http://localhost:9999");
    }
}
