//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/collections/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON list or object from the API with a bearer token.
///
/// The token is always passed in explicitly; nothing in this module reads
/// ambient storage.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
