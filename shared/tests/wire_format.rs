use shared::constants::STATUS_SUCCESS;
use shared::types::{NoteCreateResponse, NotePayload, NoteSource, NotesListResponse};

#[test]
fn list_envelope_parses_success_payload() {
    let raw = r#"{"status":"success","data":[{"id":"1","title":"A","body":"B","createdAt":"2024-01-01T00:00:00Z"}]}"#;
    let parsed: NotesListResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(parsed.status, STATUS_SUCCESS);
    assert_eq!(parsed.data.len(), 1);
    let note = &parsed.data[0];
    assert_eq!(note.id, "1");
    assert_eq!(note.title, "A");
    assert_eq!(note.body, "B");
    assert_eq!(note.created_at, "2024-01-01T00:00:00Z");
}

#[test]
fn list_envelope_keeps_server_order() {
    let raw = r#"{"status":"success","data":[
        {"id":"b","title":"second","body":"-","createdAt":"2024-01-02T00:00:00Z"},
        {"id":"a","title":"first","body":"-","createdAt":"2024-01-01T00:00:00Z"}
    ]}"#;
    let parsed: NotesListResponse = serde_json::from_str(raw).unwrap();

    let ids: Vec<&str> = parsed.data.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn list_envelope_tolerates_error_without_data() {
    let parsed: NotesListResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();

    assert_ne!(parsed.status, STATUS_SUCCESS);
    assert!(parsed.data.is_empty());
    assert!(parsed.message.is_empty());
}

#[test]
fn create_envelope_parses_returned_note() {
    let raw = r#"{"status":"success","data":{"id":"notes-9","title":"T","body":"B","createdAt":"2024-03-05T10:00:00Z"}}"#;
    let parsed: NoteCreateResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(parsed.status, STATUS_SUCCESS);
    let note = parsed.data.unwrap();
    assert_eq!(note.id, "notes-9");
    assert_eq!(note.created_at, "2024-03-05T10:00:00Z");
}

#[test]
fn create_envelope_tolerates_missing_note() {
    let parsed: NoteCreateResponse =
        serde_json::from_str(r#"{"status":"fail","message":"title required"}"#).unwrap();

    assert_ne!(parsed.status, STATUS_SUCCESS);
    assert_eq!(parsed.message, "title required");
    assert!(parsed.data.is_none());
}

#[test]
fn payload_serializes_fields_as_typed() {
    let payload = NotePayload {
        title: "  padded ".to_string(),
        body: "text".to_string(),
    };
    let raw = serde_json::to_string(&payload).unwrap();

    assert_eq!(raw, r#"{"title":"  padded ","body":"text"}"#);
}

#[test]
fn note_uses_wire_name_for_created_at() {
    let note = NoteSource {
        id: "n-1".to_string(),
        title: "T".to_string(),
        body: "B".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    };
    let raw = serde_json::to_string(&note).unwrap();

    assert!(raw.contains(r#""createdAt":"2024-01-01T00:00:00Z""#));
    assert!(!raw.contains("created_at"));
}
