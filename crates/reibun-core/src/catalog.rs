/// Identifier of a user facing message in the string catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    SelectFieldToUse,
    SelectTranslationLanguage,
    SelectSentence,
    NoExampleSelected,
    ExampleNotFound,
    ServiceUnreachable,
    FieldNotFound,
}

impl MessageKey {
    /// Every key a shipped catalog is expected to carry
    pub const ALL: [MessageKey; 7] = [
        MessageKey::SelectFieldToUse,
        MessageKey::SelectTranslationLanguage,
        MessageKey::SelectSentence,
        MessageKey::NoExampleSelected,
        MessageKey::ExampleNotFound,
        MessageKey::ServiceUnreachable,
        MessageKey::FieldNotFound,
    ];

    /// Catalog id of this key
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::SelectFieldToUse => "select_field_to_use",
            MessageKey::SelectTranslationLanguage => "select_translation_language",
            MessageKey::SelectSentence => "select_sentence",
            MessageKey::NoExampleSelected => "no_example_selected",
            MessageKey::ExampleNotFound => "example_not_found",
            MessageKey::ServiceUnreachable => "service_unreachable",
            MessageKey::FieldNotFound => "field_not_found",
        }
    }
}

/// Lookup of localized user facing messages
pub trait MessageCatalog: Send + Sync {
    fn text(&self, key: MessageKey) -> String;

    /// Lookup with one named `{placeholder}` substituted
    fn text_with(&self, key: MessageKey, name: &str, value: &str) -> String;
}
