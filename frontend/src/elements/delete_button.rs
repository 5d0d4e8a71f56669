use dominator::{Dom, events, html};

use crate::constants::{PROP_ROLE, PROP_ROLE_BUTTON, PROP_TITLE, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("delete-button__{label}")
}

/// Raises the click to its container; the owner decides what deletion means.
pub fn delete_button<F>(on_delete: F) -> Dom
    where
        F: FnMut(events::Click) + 'static
{
    html!(TAG_SPAN, {
        .class(css_class("icon"))
        .attr(PROP_ROLE, PROP_ROLE_BUTTON)
        .attr(PROP_TITLE, "Delete")
        .text("❌")
        .event(on_delete)
    })
}
