mod client;
mod note;

pub use client::{AnkiConnectClient, NoteFieldInfo, NoteInfo};
pub use note::AnkiNote;
