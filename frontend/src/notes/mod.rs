pub mod app_notes;
