use dominator::{Dom, html};

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::elements::app_header::app_header;
use crate::elements::loading::loading_indicator;
use crate::notes::app_notes::app_notes;
use crate::utils::set_title;

pub fn app_root() -> Dom {
    set_title("Notes");
    html!(TAG_DIV, {
        .class("app-root")
        .children([app_header(), app_notes(), loading_indicator()])
        .child_signal(dialogs())
    })
}
