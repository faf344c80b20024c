//! Browser [`Transport`] over the Fetch API with timeout support.

use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::{HttpResponse, Transport, TransportFuture};

/// Response headers copied into [`HttpResponse`].
const READ_HEADERS: &[&str] = &["location", "authorization", "content-type"];

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(error_message(&e)),
    }
}

fn error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Web Transport
// =============================================================================

/// [`Transport`] backed by `window.fetch`.
///
/// Every request and body read is raced against `FETCH_TIMEOUT_MS`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebTransport;

impl Transport for WebTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
    ) -> TransportFuture<'a, Result<HttpResponse, FetchError>> {
        Box::pin(send("GET", url, vec![("Authorization", authorization)], None))
    }

    fn post<'a>(
        &'a self,
        url: &'a str,
        csrf_token: &'a str,
        json_body: Option<String>,
    ) -> TransportFuture<'a, Result<HttpResponse, FetchError>> {
        let mut headers = vec![("X-CSRFToken", csrf_token)];
        if json_body.is_some() {
            headers.push(("Content-Type", "application/json"));
        }
        Box::pin(send("POST", url, headers, json_body))
    }
}

async fn send(
    method: &str,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<String>,
) -> Result<HttpResponse, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    for (name, value) in headers {
        request
            .headers()
            .set(name, value)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let resp: Response = match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(value) => value
            .dyn_into()
            .map_err(|_| FetchError::ResponseReadFailed)?,
    };

    let resp_headers = resp.headers();
    let headers = READ_HEADERS
        .iter()
        .filter_map(|name| {
            resp_headers
                .get(name)
                .ok()
                .flatten()
                .map(|value| (name.to_string(), value))
        })
        .collect();

    let buffer_promise = resp
        .array_buffer()
        .map_err(|_| FetchError::ResponseReadFailed)?;
    let buffer = match race_with_timeout(buffer_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(_) => return Err(FetchError::ResponseReadFailed),
        RaceResult::Completed(buffer) => buffer,
    };

    Ok(HttpResponse {
        status: resp.status(),
        headers,
        body: Uint8Array::new(&buffer).to_vec(),
    })
}
