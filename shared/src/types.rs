use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NoteSource {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NotePayload {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NotesListResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<NoteSource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NoteCreateResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<NoteSource>,
}

// ===

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: bool,
    pub body: bool,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        !self.title && !self.body
    }
}
