use std::str::FromStr;

/// Translation language offered by the picker and understood by the
/// sentence service. Both sides share this one enumeration, so the choice
/// list and the service codes cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    English,
    French,
}

impl TargetLanguage {
    /// Presentation order of the language choices
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::English, TargetLanguage::French];

    /// Language code the sentence service expects
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::English => "eng",
            TargetLanguage::French => "fra",
        }
    }

    /// Label shown in the language picker
    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::French => "French",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eng" | "en" | "english" => Ok(TargetLanguage::English),
            "fra" | "fr" | "french" => Ok(TargetLanguage::French),
            other => Err(format!("unknown language '{other}', expected 'eng' or 'fra'")),
        }
    }
}

/// One search invocation against the sentence service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleQuery {
    word: String,
    pub language: TargetLanguage,
}

impl ExampleQuery {
    /// Build a query; None when the word is empty
    pub fn new(word: impl Into<String>, language: TargetLanguage) -> Option<Self> {
        let word = word.into();
        if word.is_empty() {
            return None;
        }
        Some(Self { word, language })
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// A Japanese sentence paired with its translation. Both halves are
/// non-empty by construction; a partial pair is never built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceExample {
    japanese: String,
    translation: String,
}

impl SentenceExample {
    /// Build an example pair; None when either half is empty
    pub fn new(japanese: impl Into<String>, translation: impl Into<String>) -> Option<Self> {
        let japanese = japanese.into();
        let translation = translation.into();
        if japanese.is_empty() || translation.is_empty() {
            return None;
        }
        Some(Self {
            japanese,
            translation,
        })
    }

    pub fn japanese(&self) -> &str {
        &self.japanese
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Picker rendering: sentence and translation on two lines
    pub fn display_line(&self) -> String {
        format!("{}\n{}", self.japanese, self.translation)
    }
}

/// Result of one fetch against the sentence service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one usable example, in the order the service returned them
    Found(Vec<SentenceExample>),
    /// The service answered but nothing usable matched the word
    NotFound { word: String },
    /// The service could not be reached or answered unusably
    ServiceError(String),
}

/// Destination fields the committed example is written into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationFields {
    pub japanese: String,
    pub translation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_rejects_empty_word() {
        assert!(ExampleQuery::new("", TargetLanguage::English).is_none());
        assert!(ExampleQuery::new("猫", TargetLanguage::English).is_some());
    }

    #[test]
    fn test_example_requires_both_halves() {
        assert!(SentenceExample::new("猫が好きです。", "").is_none());
        assert!(SentenceExample::new("", "I like cats.").is_none());
        assert!(SentenceExample::new("猫が好きです。", "I like cats.").is_some());
    }

    #[test]
    fn test_display_line_renders_both_halves() {
        let example = SentenceExample::new("猫が好きです。", "I like cats.").unwrap();
        assert_eq!(example.display_line(), "猫が好きです。\nI like cats.");
    }

    #[test]
    fn test_language_codes_and_labels_stay_in_lockstep() {
        let codes: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.code()).collect();
        let labels: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(codes, ["eng", "fra"]);
        assert_eq!(labels, ["English", "French"]);
    }

    #[test]
    fn test_language_parses_common_spellings() {
        assert_eq!("eng".parse::<TargetLanguage>(), Ok(TargetLanguage::English));
        assert_eq!("FR".parse::<TargetLanguage>(), Ok(TargetLanguage::French));
        assert_eq!("french".parse::<TargetLanguage>(), Ok(TargetLanguage::French));
        assert!("deu".parse::<TargetLanguage>().is_err());
    }
}
