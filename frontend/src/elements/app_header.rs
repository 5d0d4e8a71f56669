use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use crate::constants::TAG_DIV;
use crate::state::NOTES;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!("h1", {
                .class(css_class("heading"))
                .text("Notes")
            }),
            html!("small", {
                .class(css_class("count"))
                .text("notes: ")
                .text_signal(NOTES.signal_vec_cloned().len().map(|v|v.to_string()))
            }),
        ])
    })
}
