use std::env;

use serde::{Deserialize, Serialize};

/// LANG-style tags like `fr_FR.UTF-8` are accepted as-is, the catalog
/// normalizes them on lookup.
fn default_locale() -> String {
    env::var("LANG").unwrap_or_else(|_| "en".to_string())
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Locale tag for user-facing messages
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl UiConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(locale) = env::var("REIBUN_LOCALE") {
            self.locale = locale;
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}
