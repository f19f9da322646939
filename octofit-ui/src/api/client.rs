//! HTTP API Client
//!
//! Fetches resource lists from the OctoFit REST API.

use gloo_net::http::Request;
use octofit::resource::{FetchError, FetchResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

const API_URL_KEY: &str = "octofit_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    let url = stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url.trim());
        }
    }
}

/// GET one resource list and return the raw body
pub async fn fetch_list(endpoint: &str) -> FetchResult<String> {
    let response = Request::get(endpoint)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let reason = response.status_text();
        return Err(FetchError::http_status(response.status(), Some(&reason)));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}
