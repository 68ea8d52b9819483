use async_trait::async_trait;

use crate::types::{ExampleQuery, FetchOutcome};

/// Modal interaction surface supplied by the host. Prompts own the
/// interaction until the user accepts or cancels.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Present a modal list; Some(row) on accept, None on cancel
    async fn choose(&self, message: &str, choices: &[String], start_row: usize) -> Option<usize>;

    /// Present a modal informational message
    async fn notify(&self, message: &str);
}

/// The record being edited, as the host exposes it
#[async_trait]
pub trait NoteRecord: Send {
    /// Field names in schema order
    fn field_names(&self) -> Vec<String>;

    /// Overwrite one field by schema position
    fn set_field(&mut self, index: usize, text: String);

    /// Whether the record already exists in the host's storage
    fn is_persisted(&self) -> bool;

    /// Write the record back to storage
    async fn persist(&mut self) -> anyhow::Result<()>;
}

/// One editing session around a record
#[async_trait]
pub trait EditContext: Send {
    /// Text of the currently focused field, if any field has focus
    fn focused_text(&self) -> Option<String>;

    fn record(&mut self) -> &mut dyn NoteRecord;

    /// Refresh the editing surface from the (possibly mutated) record
    async fn reload(&mut self) -> anyhow::Result<()>;
}

/// Provider of example sentences for a word
#[async_trait]
pub trait ExampleSource: Send + Sync {
    async fn fetch(&self, query: &ExampleQuery) -> FetchOutcome;
}
