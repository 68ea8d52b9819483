use std::collections::HashMap;

use reibun_core::catalog::{MessageCatalog, MessageKey};
use serde_json::Value;

const EN: &str = include_str!("../locales/en.json");
const FR: &str = include_str!("../locales/fr.json");

/// Message catalog backed by JSON bundles compiled into the binary.
pub struct JsonCatalog {
    messages: HashMap<String, String>,
}

impl JsonCatalog {
    /// Build the catalog for a locale tag. Tags resolve on their leading
    /// language code, so `fr`, `fr_FR` and `fr_FR.UTF-8` all pick the
    /// French bundle; anything unrecognized falls back to English.
    pub fn for_locale(tag: &str) -> Self {
        let bundle = match language_of(tag).as_str() {
            "fr" => FR,
            _ => EN,
        };
        Self::from_json(bundle)
    }

    fn from_json(data: &str) -> Self {
        let parsed: Value = match serde_json::from_str(data) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!("Failed to parse message bundle: {}", error);
                Value::Null
            }
        };

        let mut messages = HashMap::new();
        if let Value::Object(map) = parsed {
            for (key, value) in map {
                if let Value::String(text) = value {
                    messages.insert(key, text);
                }
            }
        }

        Self { messages }
    }
}

impl MessageCatalog for JsonCatalog {
    /// Missing entries fall back to the key id so a hole in a bundle
    /// still shows something recognizable on screen.
    fn text(&self, key: MessageKey) -> String {
        self.messages
            .get(key.id())
            .cloned()
            .unwrap_or_else(|| key.id().to_string())
    }

    fn text_with(&self, key: MessageKey, name: &str, value: &str) -> String {
        self.text(key).replace(&format!("{{{}}}", name), value)
    }
}

/// Leading language code of a locale tag: `fr_FR.UTF-8` -> `fr`.
fn language_of(tag: &str) -> String {
    tag.split(['_', '-', '.'])
        .next()
        .unwrap_or(tag)
        .to_lowercase()
}
