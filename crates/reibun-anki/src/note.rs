use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use reibun_core::ports::NoteRecord;

use crate::client::{AnkiConnectClient, NoteFieldInfo, NoteInfo};

/// One Anki note held in memory with its note type's field order.
pub struct AnkiNote {
    client: AnkiConnectClient,
    note_id: u64,
    names: Vec<String>,
    values: Vec<String>,
}

impl AnkiNote {
    /// Fetch the note over AnkiConnect.
    pub async fn load(client: AnkiConnectClient, note_id: u64) -> Result<Self> {
        let info = client.note_info(note_id).await?;
        Ok(Self::from_info(client, info))
    }

    fn from_info(client: AnkiConnectClient, info: NoteInfo) -> Self {
        let (names, values) = ordered_fields(info.fields);
        Self {
            client,
            note_id: info.note_id,
            names,
            values,
        }
    }

    pub fn note_id(&self) -> u64 {
        self.note_id
    }

    /// Position of a field name in the note type's order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Re-fetch the note so later reads see the stored state.
    pub async fn refresh(&mut self) -> Result<()> {
        let info = self.client.note_info(self.note_id).await?;
        let (names, values) = ordered_fields(info.fields);
        self.names = names;
        self.values = values;
        Ok(())
    }
}

/// notesInfo hands fields back as a map, the note type's order lives on
/// each entry.
fn ordered_fields(fields: HashMap<String, NoteFieldInfo>) -> (Vec<String>, Vec<String>) {
    let mut fields: Vec<_> = fields.into_iter().collect();
    fields.sort_by_key(|(_, field)| field.order);

    let names = fields.iter().map(|(name, _)| name.clone()).collect();
    let values = fields.into_iter().map(|(_, field)| field.value).collect();
    (names, values)
}

#[async_trait]
impl NoteRecord for AnkiNote {
    fn field_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn set_field(&mut self, index: usize, text: String) {
        if let Some(value) = self.values.get_mut(index) {
            *value = text;
        }
    }

    fn is_persisted(&self) -> bool {
        self.note_id != 0
    }

    async fn persist(&mut self) -> Result<()> {
        let fields: HashMap<String, String> = self
            .names
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect();
        self.client.update_note_fields(self.note_id, &fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: &str, order: u32) -> NoteFieldInfo {
        NoteFieldInfo {
            value: value.to_string(),
            order,
        }
    }

    fn sample_note() -> AnkiNote {
        let info = NoteInfo {
            note_id: 42,
            model_name: "Japanese (recognition)".to_string(),
            fields: HashMap::from([
                ("Sentence".to_string(), field("", 1)),
                ("Word".to_string(), field("猫", 0)),
                ("SentenceTranslation".to_string(), field("", 2)),
            ]),
        };
        AnkiNote::from_info(AnkiConnectClient::new("http://localhost:8765".to_string()), info)
    }

    #[test]
    fn test_fields_follow_note_type_order() {
        let (names, values) = ordered_fields(HashMap::from([
            ("Third".to_string(), field("c", 2)),
            ("First".to_string(), field("a", 0)),
            ("Second".to_string(), field("b", 1)),
        ]));

        assert_eq!(names, ["First", "Second", "Third"]);
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn test_position_and_value_lookup() {
        let note = sample_note();

        assert_eq!(note.position("Word"), Some(0));
        assert_eq!(note.position("SentenceTranslation"), Some(2));
        assert_eq!(note.position("Reading"), None);
        assert_eq!(note.value_at(0), Some("猫"));
        assert_eq!(note.value_at(9), None);
    }

    #[test]
    fn test_set_field_ignores_out_of_range_index() {
        let mut note = sample_note();

        note.set_field(1, "猫が好きです。".to_string());
        note.set_field(9, "dropped".to_string());

        assert_eq!(note.value_at(1), Some("猫が好きです。"));
        assert_eq!(note.field_names().len(), 3);
    }

    #[test]
    fn test_unsaved_note_id_is_not_persisted() {
        let info = NoteInfo {
            note_id: 0,
            model_name: String::new(),
            fields: HashMap::new(),
        };
        let note =
            AnkiNote::from_info(AnkiConnectClient::new("http://localhost:8765".to_string()), info);

        assert!(!note.is_persisted());
        assert!(sample_note().is_persisted());
    }
}
