use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use shared::constants::{API_NOTES, ROOT_API, STATUS_SUCCESS};
use shared::types::{NoteCreateResponse, NotePayload, NoteSource, NotesListResponse};

/// One error kind for transport and application failures alike; the message
/// is the only place the two can be told apart.
#[derive(Debug, Clone)]
pub struct RequestError {
    pub message: String,
}

impl From<JsValue> for RequestError {
    fn from(err: JsValue) -> Self {
        Self { message: format!("{err:?}") }
    }
}

impl From<serde_wasm_bindgen::Error> for RequestError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self { message: err.to_string() }
    }
}

fn notes_url() -> String {
    format!("{ROOT_API}/{API_NOTES}")
}

fn note_url(id: &str) -> String {
    format!("{ROOT_API}/{API_NOTES}/{id}")
}

// ===

pub async fn fetch_notes() -> Result<Vec<NoteSource>, RequestError> {
    let data: NotesListResponse = request("GET", &notes_url(), None).await?;
    if data.status == STATUS_SUCCESS {
        Ok(data.data)
    } else {
        Err(RequestError {
            message: format!("list rejected: {} {}", data.status, data.message),
        })
    }
}

pub async fn create_note(payload: &NotePayload) -> Result<NoteSource, RequestError> {
    let body = serde_wasm_bindgen::to_value(payload)?;
    let data: NoteCreateResponse = request("POST", &notes_url(), Some(body)).await?;
    if data.status != STATUS_SUCCESS {
        return Err(RequestError {
            message: format!("create rejected: {} {}", data.status, data.message),
        });
    }
    data.data.ok_or_else(|| RequestError {
        message: "create response carried no note".to_string(),
    })
}

pub async fn delete_note(id: &str) -> Result<(), RequestError> {
    let resp = send("DELETE", &note_url(id), None).await?;
    if resp.ok() {
        return Ok(());
    }
    // diagnostics are best effort: a malformed body degrades to status text
    let detail = match resp.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(json) => js_sys::JSON::stringify(&json)
                .map(String::from)
                .unwrap_or_else(|_| resp.status_text()),
            Err(_) => resp.status_text(),
        },
        Err(_) => resp.status_text(),
    };
    Err(RequestError {
        message: format!("delete rejected ({}): {detail}", resp.status()),
    })
}

// ===

async fn request<R>(method: &str, url: &str, data: Option<JsValue>) -> Result<R, RequestError>
    where
        R: serde::de::DeserializeOwned
{
    let resp = send(method, url, data).await?;
    let json = JsFuture::from(resp.json().map_err(RequestError::from)?)
        .await
        .map_err(RequestError::from)?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

async fn send(method: &str, url: &str, data: Option<JsValue>) -> Result<Response, JsValue> {
    let mut opts = RequestInit::new();
    opts.method(method);
    if let Some(data) = data {
        if let Ok(data) = js_sys::JSON::stringify(&data) {
            opts.body(Some(&data));
        }
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into().unwrap();
    Ok(resp)
}
