use web_sys::window;

const TOKEN_KEY: &str = "token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save API token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get API token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Clear the stored API token
pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
