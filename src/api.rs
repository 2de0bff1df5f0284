//! API Client
//!
//! Thin wrapper over the browser Fetch API for the JSONPlaceholder endpoints.
//! Failures are logged to the console and degrade to an empty list; callers
//! never see a fetch error.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Fetch a list of records from `BASE_URL` + `endpoint`
/// (e.g. `/todos?userId=3`). Returns an empty list on any failure.
pub async fn fetch_list<T: DeserializeOwned>(endpoint: &str) -> Vec<T> {
    match try_fetch_list(endpoint).await {
        Ok(records) => records,
        Err(err) => {
            web_sys::console::error_2(
                &format!("API error fetching {}:", endpoint).into(),
                &err,
            );
            Vec::new()
        }
    }
}

async fn try_fetch_list<T: DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let url = format!("{}{}", BASE_URL, endpoint);

    let response_value = JsFuture::from(window.fetch_with_str(&url)).await?;
    let response: web_sys::Response = response_value.dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "status {} from {}",
            response.status(),
            url
        )));
    }

    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}
