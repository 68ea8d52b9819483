use anyhow::Result;
use async_trait::async_trait;
use reibun_anki::AnkiNote;
use reibun_core::ports::{EditContext, NoteRecord};

/// Stand-in for the host editor: one loaded note plus the field the
/// user is working in.
pub struct EditorSession {
    note: AnkiNote,
    focused: Option<usize>,
}

impl EditorSession {
    pub fn new(note: AnkiNote, focused: Option<usize>) -> Self {
        Self { note, focused }
    }
}

#[async_trait]
impl EditContext for EditorSession {
    fn focused_text(&self) -> Option<String> {
        self.focused
            .and_then(|index| self.note.value_at(index))
            .map(str::to_string)
    }

    fn record(&mut self) -> &mut dyn NoteRecord {
        &mut self.note
    }

    async fn reload(&mut self) -> Result<()> {
        self.note.refresh().await
    }
}
