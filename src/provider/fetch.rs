// Browser fetch with an abort timer

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, Response};

use crate::provider::LoadError;

/// GETs `url` and decodes the JSON body. The request (body included) is aborted
/// once `timeout_ms` elapses.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, timeout_ms: i32) -> Result<T, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let controller = AbortController::new().map_err(js_err)?;
    let signal = controller.signal();
    let abort = Closure::once(move || controller.abort());
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            timeout_ms,
        )
        .map_err(js_err)?;

    let result = read_body(&window, url, &signal).await;
    window.clear_timeout_with_handle(timer);
    drop(abort);

    let text = result?;
    Ok(serde_json::from_str(&text)?)
}

async fn read_body(
    window: &web_sys::Window,
    url: &str,
    signal: &web_sys::AbortSignal,
) -> Result<String, LoadError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(signal));
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string().ok_or(LoadError::Body)
}

fn js_err(value: JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", value))
}
