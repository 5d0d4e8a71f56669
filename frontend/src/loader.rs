use wasm_bindgen_futures::spawn_local;

use shared::types::NotePayload;

use crate::connect_fetch::{create_note, delete_note, fetch_notes};
use crate::notes::app_notes::form_clear;
use crate::state::{LOADING, NOTES};
use crate::types::NoteStruct;

pub fn notes_load() {
    LOADING.set(true);
    spawn_local(async {
        match fetch_notes().await {
            Ok(list) => {
                NOTES.lock_mut().replace_cloned(list.into_iter().map(NoteStruct::from).collect());
            }
            Err(err) => {
                log::error!("failed to load notes: {}", err.message);
            }
        }
        LOADING.set(false);
    });
}

// ===

pub fn note_create(payload: NotePayload) {
    LOADING.set(true);
    spawn_local(async move {
        match create_note(&payload).await {
            Ok(note) => {
                NOTES.lock_mut().push_cloned(NoteStruct::from(note));
                form_clear();
            }
            Err(err) => {
                log::error!("failed to create note: {}", err.message);
            }
        }
        LOADING.set(false);
    });
}

pub fn note_delete(id: String) {
    LOADING.set(true);
    spawn_local(async move {
        match delete_note(&id).await {
            Ok(()) => {
                let ind_current = NOTES.lock_ref().iter().position(|row| row.id == id);
                if let Some(ind_current) = ind_current {
                    NOTES.lock_mut().remove(ind_current);
                }
            }
            Err(err) => {
                log::error!("failed to delete note {id}: {}", err.message);
            }
        }
        LOADING.set(false);
    });
}
