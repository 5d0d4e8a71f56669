use dominator::{Dom, events, html};

use shared::utils::note_background;

use crate::constants::TAG_DIV;
use crate::elements::delete_button::delete_button;
use crate::elements::note_date::note_date;
use crate::notes::app_notes::confirm_delete;
use crate::types::NoteStruct;

fn css_class(label: &str) -> String {
    format!("note-card__{label}")
}

pub fn note_card(item: NoteStruct) -> Dom {
    let id = item.id.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .style("background-color", &note_background(&item.title))
        .children([
            html!("h3", {
                .class(css_class("heading"))
                .text(&item.title)
            }),
            html!("p", {
                .class(css_class("body"))
                .text(&item.body)
            }),
            delete_button(move|_: events::Click| confirm_delete(id.clone())),
            note_date(&item.created_at),
        ])
    })
}
