// ============================================================================
// STORAGE - Credential store + localStorage helpers
// ============================================================================
// The bearer token is stored raw (the backend hands us an opaque string);
// structured values (cached profile) go through the JSON helpers.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::utils::constants::{SESSION_KEYS, STORAGE_KEY_TOKEN, TOKEN_KEYS};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current bearer token, if any. Checks the primary key first, then the
/// legacy key, skipping empty values either way.
pub fn get_token() -> Option<String> {
    let storage = get_local_storage()?;
    for key in TOKEN_KEYS {
        if let Ok(Some(value)) = storage.get_item(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

/// Store a freshly issued token under the primary key.
pub fn set_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(STORAGE_KEY_TOKEN, token).is_err() {
            log::error!("❌ Could not persist token to localStorage");
        }
    }
}

/// Tear down the whole client-held session: token, legacy token, cached
/// profile and refresh token. Idempotent, never fails.
pub fn clear_session() {
    for key in SESSION_KEYS {
        let _ = remove_from_storage(key);
    }
    log::info!("🧹 Session storage cleared");
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializing value for storage: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error writing to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error removing from localStorage".to_string())?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::utils::constants::{STORAGE_KEY_TOKEN_LEGACY, STORAGE_KEY_USER};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reset() {
        clear_session();
    }

    #[wasm_bindgen_test]
    fn primary_key_wins_over_legacy() {
        reset();
        let storage = get_local_storage().unwrap();
        storage.set_item(STORAGE_KEY_TOKEN, "current-token").unwrap();
        storage.set_item(STORAGE_KEY_TOKEN_LEGACY, "old-token").unwrap();

        assert_eq!(get_token().as_deref(), Some("current-token"));
    }

    #[wasm_bindgen_test]
    fn legacy_key_still_readable() {
        reset();
        let storage = get_local_storage().unwrap();
        storage.set_item(STORAGE_KEY_TOKEN_LEGACY, "old-token").unwrap();

        assert_eq!(get_token().as_deref(), Some("old-token"));
    }

    #[wasm_bindgen_test]
    fn empty_primary_falls_through_to_legacy() {
        reset();
        let storage = get_local_storage().unwrap();
        storage.set_item(STORAGE_KEY_TOKEN, "").unwrap();
        storage.set_item(STORAGE_KEY_TOKEN_LEGACY, "old-token").unwrap();

        assert_eq!(get_token().as_deref(), Some("old-token"));
    }

    #[wasm_bindgen_test]
    fn clear_session_removes_every_key() {
        reset();
        let storage = get_local_storage().unwrap();
        storage.set_item(STORAGE_KEY_TOKEN, "t").unwrap();
        storage.set_item(STORAGE_KEY_TOKEN_LEGACY, "t2").unwrap();
        storage.set_item(STORAGE_KEY_USER, "{}").unwrap();

        clear_session();
        // Idempotent on a second pass
        clear_session();

        assert_eq!(get_token(), None);
        for key in SESSION_KEYS {
            assert_eq!(storage.get_item(key).unwrap(), None);
        }
    }
}
