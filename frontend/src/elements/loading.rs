use dominator::{Dom, html};

use crate::constants::TAG_DIV;
use crate::state::LOADING;

fn css_class(label: &str) -> String {
    format!("loading__{label}")
}

pub fn loading_indicator() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("indicator"))
        .visible_signal(LOADING.signal())
        .text("Loading...")
    })
}
