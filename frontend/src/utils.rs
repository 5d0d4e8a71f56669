use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn get_value_by_query(selectors: &str) -> String {
    query_selector(selectors)
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn get_input_value(name: &str) -> String {
    get_value_by_query(&format!("[name={name}]"))
}

pub fn set_input_value(name: &str, value: &str) {
    if let Some(element) = query_selector(&format!("[name={name}]")) {
        let element = JsValue::from(element);
        if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
            element.set_value(value);
        } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
            element.set_value(value);
        }
    }
}
