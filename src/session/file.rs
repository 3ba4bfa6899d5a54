//! File-backed token storage
//!
//! One file per storage key inside a private directory. On Unix the
//! directory is created `0700` and token files `0600`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::storage::{TokenStorage, TokenStoreError};

/// Token storage rooted at a directory
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    dir: PathBuf,
}

impl FileTokenStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(name)
    }

    fn ensure_dir(&self) -> Result<(), TokenStoreError> {
        fs::create_dir_all(&self.dir).map_err(|error| TokenStoreError::Io {
            path: self.dir.clone(),
            error,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(TokenStoreError::Io { path, error }),
        }
    }

    fn save(&self, key: &str, token: &str) -> Result<(), TokenStoreError> {
        self.ensure_dir()?;

        let path = self.path_for(key);
        fs::write(&path, token).map_err(|error| TokenStoreError::Io {
            path: path.clone(),
            error,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|error| TokenStoreError::Io { path, error })?;
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(TokenStoreError::Io { path, error }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_remove() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("tokens"));

        assert_eq!(storage.load("adminToken").unwrap(), None);

        storage.save("adminToken", "secret").unwrap();
        assert_eq!(storage.load("adminToken").unwrap().as_deref(), Some("secret"));

        storage.remove("adminToken").unwrap();
        storage.remove("adminToken").unwrap();
        assert_eq!(storage.load("adminToken").unwrap(), None);
    }

    #[test]
    fn test_keys_are_isolated() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path());

        storage.save("token", "user").unwrap();
        storage.save("adminToken", "admin").unwrap();
        storage.remove("token").unwrap();

        assert_eq!(storage.load("adminToken").unwrap().as_deref(), Some("admin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("tokens"));
        storage.save("token", "t").unwrap();

        let mode = fs::metadata(storage.path_for("token"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_key_is_sanitized() {
        let storage = FileTokenStorage::new("/tmp/x");
        assert_eq!(storage.path_for("../evil"), PathBuf::from("/tmp/x/___evil"));
    }
}
