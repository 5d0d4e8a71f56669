use dominator::{Dom, events, html};
use futures_signals::signal::Mutable;
use futures_signals::signal_vec::SignalVecExt;
use once_cell::sync::Lazy;

use shared::types::NotePayload;
use shared::utils::validate_note;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::dialog::dialogs::Dialog;
use crate::elements::note_card::note_card;
use crate::loader::{note_create, note_delete};
use crate::state::{BODY_ERROR, NOTES, TITLE_ERROR};
use crate::utils::{get_input_value, set_input_value};

const INPUT_NAME_TITLE: &'static str = "title";
const INPUT_NAME_BODY: &'static str = "body";
const CLASS_ERROR: &'static str = "error";

static CURRENT_ID: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new(String::new()));

fn css_class(label: &str) -> String {
    format!("app-notes__{label}")
}

pub fn app_notes() -> Dom {
    html!(TAG_DIV,{
        .class(css_class("container"))
        .children([
            note_form(),
            notes_list()
        ])
    })
}

// ===

fn note_form() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .class_signal(CLASS_ERROR, TITLE_ERROR.signal())
                .attr(PROP_TITLE, "Title")
                .attr(PROP_PLACEHOLDER, "Title")
                .attr(PROP_TYPE, "text")
                .attr(PROP_NAME, INPUT_NAME_TITLE)
                .event(handle_title_input)
            }),
            html!("textarea", {
                .class(css_class("input"))
                .class_signal(CLASS_ERROR, BODY_ERROR.signal())
                .attr(PROP_TITLE, "Body")
                .attr(PROP_PLACEHOLDER, "Body")
                .attr(PROP_NAME, INPUT_NAME_BODY)
                .event(handle_body_input)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .text("Add note")
                .event(handle_submit)
            }),
        ])
    })
}

fn handle_title_input(_: events::Input) {
    TITLE_ERROR.set_neq(get_input_value(INPUT_NAME_TITLE).trim().is_empty());
}

fn handle_body_input(_: events::Input) {
    BODY_ERROR.set_neq(get_input_value(INPUT_NAME_BODY).trim().is_empty());
}

fn handle_submit(_: events::Click) {
    let title = get_input_value(INPUT_NAME_TITLE);
    let body = get_input_value(INPUT_NAME_BODY);

    let errors = validate_note(&title, &body);
    TITLE_ERROR.set_neq(errors.title);
    BODY_ERROR.set_neq(errors.body);
    if !errors.is_valid() {
        return;
    }

    // values go out as typed; validation only trims for the emptiness check
    note_create(NotePayload { title, body });
}

pub fn form_clear() {
    set_input_value(INPUT_NAME_TITLE, "");
    set_input_value(INPUT_NAME_BODY, "");
    TITLE_ERROR.set_neq(false);
    BODY_ERROR.set_neq(false);
}

// ===

fn notes_list() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("list"))
        .children_signal_vec(NOTES.signal_vec_cloned().map(note_card))
    })
}

pub fn confirm_delete(id: String) {
    CURRENT_ID.set_neq(id);
    Dialog::confirm("Delete this note?", delete_confirmed, || {});
}

fn delete_confirmed() {
    note_delete(CURRENT_ID.get_cloned());
}
