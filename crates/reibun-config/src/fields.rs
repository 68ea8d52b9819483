use reibun_core::types::DestinationFields;
use serde::{Deserialize, Serialize};

fn default_japanese_field() -> String {
    "Sentence".to_string()
}

fn default_translation_field() -> String {
    "SentenceTranslation".to_string()
}

/// Names of the two note fields that receive a committed example.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FieldsConfig {
    /// Destination field for the Japanese sentence
    #[serde(default = "default_japanese_field")]
    pub japanese: String,
    /// Destination field for its translation
    #[serde(default = "default_translation_field")]
    pub translation: String,
}

impl FieldsConfig {
    pub fn destinations(&self) -> DestinationFields {
        DestinationFields {
            japanese: self.japanese.clone(),
            translation: self.translation.clone(),
        }
    }
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            japanese: default_japanese_field(),
            translation: default_translation_field(),
        }
    }
}
