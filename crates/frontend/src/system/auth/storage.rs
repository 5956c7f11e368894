//! Token persistence. The bearer token is the only durable credential the
//! client holds.

use web_sys::window;

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
