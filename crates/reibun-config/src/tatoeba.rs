use std::env;

use serde::{Deserialize, Serialize};

fn default_search_url() -> String {
    "https://tatoeba.org/en/api_v0/search".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TatoebaConfig {
    /// Full URL of the sentence search endpoint
    #[serde(default = "default_search_url")]
    pub url: String,
}

impl TatoebaConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(url) = env::var("TATOEBA_URL") {
            self.url = url;
        }
    }
}

impl Default for TatoebaConfig {
    fn default() -> Self {
        Self {
            url: default_search_url(),
        }
    }
}
