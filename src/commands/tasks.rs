//! Task Endpoint Calls
//!
//! Reads go through reqwest. Writes use the fetch API directly in `no-cors`
//! mode: the endpoint does not answer CORS preflights, and the opaque
//! response (status 0) cannot be represented as a reqwest response.

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode};

use crate::error::{AppError, Result};
use crate::models::{AcknowledgeRequest, NewTask, Task};
use crate::normalize::normalize_response;

/// `no-cors` only lets CORS-safelisted content types through
const WRITE_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

// ========================
// Reads
// ========================

/// GET the full task list
pub async fn fetch_tasks(endpoint: &Url) -> Result<Vec<Task>> {
    let response = reqwest::Client::new().get(endpoint.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Transport(format!("endpoint answered HTTP {}", status)));
    }

    let data: Value = response.json().await?;
    Ok(normalize_response(&data))
}

// ========================
// Writes
// ========================

/// POST a new task. Resolves once the request was handed to the network.
pub async fn submit_task(endpoint: &Url, task: &NewTask) -> Result<()> {
    post_no_cors(endpoint, task).await
}

/// POST an acknowledgement for a server row
pub async fn acknowledge_task(endpoint: &Url, row_number: u32) -> Result<()> {
    post_no_cors(endpoint, &AcknowledgeRequest::new(row_number)).await
}

async fn post_no_cors<T: Serialize>(endpoint: &Url, payload: &T) -> Result<()> {
    let body = serde_json::to_string(payload)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::NoCors);
    init.set_cache(RequestCache::NoCache);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint.as_str(), &init).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", WRITE_CONTENT_TYPE)
        .map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| AppError::Transport("no browser window".to_string()))?;
    JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    Ok(())
}

fn js_error(err: JsValue) -> AppError {
    AppError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
