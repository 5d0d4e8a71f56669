use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use once_cell::sync::Lazy;

use crate::constants::{TAG_BUTTON, TAG_DIV};

pub static DIALOGS: Lazy<MutableVec<Dialog>> = Lazy::new(|| {
    MutableVec::new()
});

#[derive(Clone, Debug)]
pub struct Dialog {
    pub message: String,
    pub confirm: fn(),
    pub cancel: fn(),
}

impl Dialog {
    pub fn confirm(message: &str, confirm: fn(), cancel: fn()) {
        DIALOGS.lock_mut().push_cloned(Self {
            message: message.to_string(),
            confirm,
            cancel,
        });
    }
}

// ===

fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

pub fn dialogs() -> impl Signal<Item=Option<Dom>> {
    DIALOGS.signal_vec_cloned().to_signal_cloned().map(current_element)
}

fn current_element(list: Vec<Dialog>) -> Option<Dom> {
    list.last().map(dialog_confirm)
}

fn dialog_confirm(data: &Dialog) -> Dom {
    let confirm = data.confirm;
    let cancel = data.cancel;
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .children([
                html!(TAG_DIV,{
                    .class(css_class("body"))
                    .text(&data.message)
                }),
                html!(TAG_DIV,{
                    .class(css_class("footer"))
                    .children([
                        html!(TAG_BUTTON, {
                            .text("Yes")
                            .attr("aria-label", "confirm")
                            .event(move|_: events::Click|{
                                confirm();
                                dialog_close();
                            })
                        }),
                        html!(TAG_BUTTON, {
                            .text("No")
                            .attr("aria-label", "cancel")
                            .event(move|_: events::Click|{
                                cancel();
                                dialog_close();
                            })
                        }),
                    ])
                }),
            ])
        }))
    })
}

fn dialog_close() {
    let count = DIALOGS.lock_mut().len();
    if count > 0 {
        DIALOGS.lock_mut().remove(count - 1);
    }
}
