use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Fetch one note with its field names, values and field order
    pub async fn note_info(&self, note_id: u64) -> Result<NoteInfo> {
        let params = json!({ "notes": [note_id] });
        let response: AnkiResponse<Vec<serde_json::Value>> =
            self.invoke("notesInfo", params).await?;

        // A missing note comes back as an empty object in the result list
        let entry = response
            .into_result()?
            .into_iter()
            .next()
            .with_context(|| format!("Note {note_id} not found"))?;
        serde_json::from_value(entry).with_context(|| format!("Note {note_id} does not exist"))
    }

    /// Overwrite the named fields of an existing note
    pub async fn update_note_fields(
        &self,
        note_id: u64,
        fields: &HashMap<String, String>,
    ) -> Result<()> {
        let params = json!({
            "note": {
                "id": note_id,
                "fields": fields,
            }
        });

        let response: AnkiResponse<serde_json::Value> =
            self.invoke("updateNoteFields", params).await?;
        response.into_unit()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteInfo {
    #[serde(rename = "noteId")]
    pub note_id: u64,
    #[serde(rename = "modelName", default)]
    pub model_name: String,
    #[serde(default)]
    pub fields: HashMap<String, NoteFieldInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteFieldInfo {
    #[serde(default)]
    pub value: String,
    pub order: u32,
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }

    /// Some actions signal success with a null result
    fn into_unit(self) -> Result<()> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        Ok(())
    }
}
