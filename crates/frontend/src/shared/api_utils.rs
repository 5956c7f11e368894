//! API URL construction.
//!
//! The backend listens on port 8000 of the same host and mounts every
//! route under `/api`. Deriving the base from the current location keeps
//! one build working on localhost and on the plant network.

/// Base URL for API requests, e.g. `http://localhost:8000/api`.
///
/// Empty string outside a browser context.
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
    format!("{}//{}:8000/api", protocol, hostname)
}

/// Full API URL for a path like `/lotes` or `/sectores/3`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
