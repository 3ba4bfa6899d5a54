//! Token persistence
//!
//! Bearer tokens survive restarts under fixed keys. Tokens are only ever
//! replaced wholesale or removed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// Token storage errors
#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("Failed to access token file {path}: {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Token storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value store for bearer tokens
pub trait TokenStorage {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError>;

    fn save(&self, key: &str, token: &str) -> Result<(), TokenStoreError>;

    /// Removing an absent key succeeds
    fn remove(&self, key: &str) -> Result<(), TokenStoreError>;
}

impl<S: TokenStorage + ?Sized> TokenStorage for Rc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, token: &str) -> Result<(), TokenStoreError> {
        (**self).save(key, token)
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        (**self).remove(key)
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, token: &str) -> Result<(), TokenStoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), token.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_is_shared_between_clones() {
        let storage = MemoryTokenStorage::new();
        let other = storage.clone();

        storage.save("token", "abc").unwrap();
        assert_eq!(other.load("token").unwrap().as_deref(), Some("abc"));

        other.remove("token").unwrap();
        other.remove("token").unwrap();
        assert_eq!(storage.load("token").unwrap(), None);
    }
}
