use gloo::storage::{LocalStorage, Storage};

use crate::services::logging::Logger;

/// The single well-known storage key for the session token.
const TOKEN_STORAGE_KEY: &str = "token";

/// Read the persisted token, if any. Called once at mount so a session
/// survives a page reload.
pub fn load_token() -> Option<String> {
    LocalStorage::raw().get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

/// Persist the token as the bare string, not JSON. The token is opaque to
/// the client; the backend is the sole authority on its validity.
pub fn store_token(token: &str) {
    if let Err(e) = LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, token) {
        Logger::error_with_component("session", &format!("Failed to persist token: {:?}", e));
    }
}

/// Remove the persisted token on logout.
pub fn clear_token() {
    let _ = LocalStorage::raw().remove_item(TOKEN_STORAGE_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trips_as_bare_string() {
        store_token("abc123");

        // The raw stored value must be the token itself, no quoting.
        let raw = LocalStorage::raw().get_item(TOKEN_STORAGE_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some("abc123"));
        assert_eq!(load_token().as_deref(), Some("abc123"));

        clear_token();
        assert_eq!(load_token(), None);
    }
}
