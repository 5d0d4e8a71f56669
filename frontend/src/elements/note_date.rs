use dominator::{Dom, html};
use wasm_bindgen::JsValue;

use crate::constants::TAG_SPAN;

fn css_class(label: &str) -> String {
    format!("note-date__{label}")
}

pub fn note_date(created_at: &str) -> Dom {
    html!(TAG_SPAN, {
        .class(css_class("label"))
        .text(&format!("Created at: {}", format_timestamp(created_at)))
    })
}

// total over any input: an unparseable value renders as "Invalid Date"
pub fn format_timestamp(value: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(value));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
