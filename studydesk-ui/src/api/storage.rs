//! Token persistence in `localStorage`

use studydesk::session::{TokenStorage, TokenStoreError};

/// Session tokens kept in the browser's `localStorage`.
///
/// Keys are the realms' fixed storage keys (`token`, `adminToken`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

fn local_storage() -> Result<web_sys::Storage, TokenStoreError> {
    web_sys::window()
        .ok_or_else(|| TokenStoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|_| TokenStoreError::Unavailable("localStorage access denied".to_string()))?
        .ok_or_else(|| TokenStoreError::Unavailable("localStorage not supported".to_string()))
}

fn js_error(action: &str, key: &str) -> TokenStoreError {
    TokenStoreError::Unavailable(format!("failed to {} {}", action, key))
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| js_error("read", key))
    }

    fn save(&self, key: &str, token: &str) -> Result<(), TokenStoreError> {
        local_storage()?
            .set_item(key, token)
            .map_err(|_| js_error("write", key))
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| js_error("remove", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trip() {
        let storage = LocalTokenStorage;
        storage.save("adminToken", "admin-tok").unwrap();
        assert_eq!(storage.load("adminToken").unwrap().as_deref(), Some("admin-tok"));

        storage.remove("adminToken").unwrap();
        assert_eq!(storage.load("adminToken").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_realm_keys_are_independent() {
        let storage = LocalTokenStorage;
        storage.save("token", "user-tok").unwrap();
        storage.save("adminToken", "admin-tok").unwrap();
        storage.remove("adminToken").unwrap();

        assert_eq!(storage.load("token").unwrap().as_deref(), Some("user-tok"));
        storage.remove("token").unwrap();
    }
}
