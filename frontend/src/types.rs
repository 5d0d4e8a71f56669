use shared::types::NoteSource;

#[derive(Debug, Clone, Default)]
pub struct NoteStruct {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
}

impl From<NoteSource> for NoteStruct {
    fn from(src: NoteSource) -> Self {
        Self {
            id: src.id,
            title: src.title,
            body: src.body,
            created_at: src.created_at,
        }
    }
}

impl PartialEq<NoteStruct> for NoteStruct {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
