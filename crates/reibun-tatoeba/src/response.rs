use reibun_core::types::SentenceExample;
use serde::Deserialize;
use serde_json::Value;

/// Body of a Tatoeba search reply. Entries stay raw `Value`s so one
/// malformed entry never poisons the rest of the page.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    results: Vec<Value>,
}

impl SearchResponse {
    /// Decode every usable entry, keeping the service's order.
    pub fn into_examples(self) -> Vec<SentenceExample> {
        self.results.into_iter().filter_map(decode_entry).collect()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    text: Option<String>,
    #[serde(default)]
    transcriptions: Vec<Transcription>,
    #[serde(default)]
    translations: Vec<Vec<TranslationCandidate>>,
}

#[derive(Debug, Deserialize)]
struct Transcription {
    #[serde(rename = "needsReview")]
    needs_review: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct TranslationCandidate {
    text: Option<String>,
}

/// An entry is usable only when its first transcription has been vetted
/// (`needsReview` is literally false) and both sentence halves are
/// present and non-empty. Anything else, including entries that do not
/// decode at all, yields None.
fn decode_entry(entry: Value) -> Option<SentenceExample> {
    let result: SearchResult = serde_json::from_value(entry).ok()?;
    if result.transcriptions.first()?.needs_review != Some(false) {
        return None;
    }
    let japanese = result.text?;
    let translation = result
        .translations
        .into_iter()
        .next()?
        .into_iter()
        .next()?
        .text?;
    SentenceExample::new(japanese, translation)
}
